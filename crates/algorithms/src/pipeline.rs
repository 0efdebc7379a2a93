//! Coin edge pipeline
//!
//! Color image → grayscale → inverse Otsu mask → six morphological
//! transforms → gradient edges painted red on the original. Every stage
//! allocates its own buffer; the input image is never modified.

use morfo_core::{ColorImage, Gallery, Plane, Result};
use tracing::{debug, info};

use crate::imagery::{binarize_otsu, overlay_mask, to_grayscale, OverlayParams, ThresholdParams};
use crate::morphology::{closing, dilate, erode, gradient, opening, top_hat, StructuringElement};

/// Panel titles in display order
pub const PANEL_TITLES: [&str; 9] = [
    "Original Gray",
    "Binary Image",
    "Erosion",
    "Dilation",
    "Opening",
    "Closing",
    "Morphological Gradient",
    "Top Hat",
    "Result (Edges in Red)",
];

/// Display grid used for the pipeline gallery
pub const GRID: (usize, usize) = (3, 3);

/// Parameters for the whole pipeline
#[derive(Debug, Clone)]
pub struct PipelineParams {
    /// Kernel shared by every morphological stage
    pub element: StructuringElement,
    pub erode_iterations: usize,
    pub dilate_iterations: usize,
    pub opening_iterations: usize,
    pub closing_iterations: usize,
    pub gradient_iterations: usize,
    pub top_hat_iterations: usize,
    pub threshold: ThresholdParams,
    pub overlay: OverlayParams,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            element: StructuringElement::Square(2),
            erode_iterations: 1,
            dilate_iterations: 1,
            opening_iterations: 2,
            closing_iterations: 2,
            gradient_iterations: 1,
            top_hat_iterations: 1,
            threshold: ThresholdParams::default(),
            overlay: OverlayParams::default(),
        }
    }
}

/// Every intermediate buffer produced by [`run_pipeline`]
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub gray: Plane<u8>,
    /// Otsu level used for `binary`
    pub threshold: u8,
    pub binary: Plane<u8>,
    pub eroded: Plane<u8>,
    pub dilated: Plane<u8>,
    pub opened: Plane<u8>,
    pub closed: Plane<u8>,
    pub gradient: Plane<u8>,
    /// Computed on `gray`, not on the mask
    pub top_hat: Plane<u8>,
    /// Original colors with gradient pixels painted
    pub result: ColorImage,
}

impl PipelineOutput {
    /// Arrange the nine display images in a 3x3 gallery
    pub fn into_gallery(self) -> Result<Gallery> {
        let mut gallery = Gallery::new(GRID.0, GRID.1)?;
        let [gray, binary, eroded, dilated, opened, closed, grad, hat, result] = PANEL_TITLES;
        gallery.push(gray, self.gray)?;
        gallery.push(binary, self.binary)?;
        gallery.push(eroded, self.eroded)?;
        gallery.push(dilated, self.dilated)?;
        gallery.push(opened, self.opened)?;
        gallery.push(closed, self.closed)?;
        gallery.push(grad, self.gradient)?;
        gallery.push(hat, self.top_hat)?;
        gallery.push(result, self.result)?;
        Ok(gallery)
    }
}

/// Run every stage on a BGR image
pub fn run_pipeline(image: &ColorImage, params: &PipelineParams) -> Result<PipelineOutput> {
    let se = &params.element;
    params.element.validate()?;

    let gray = to_grayscale(image)?;
    debug!(rows = gray.rows(), cols = gray.cols(), "grayscale ready");

    let binarized = binarize_otsu(&gray, &params.threshold)?;
    info!(
        threshold = binarized.threshold,
        foreground = binarized.mask.count(params.threshold.max_value),
        "binarized with Otsu level"
    );
    let binary = binarized.mask;

    let eroded = erode(&binary, se, params.erode_iterations)?;
    let dilated = dilate(&binary, se, params.dilate_iterations)?;
    let opened = opening(&binary, se, params.opening_iterations)?;
    let closed = closing(&binary, se, params.closing_iterations)?;
    let grad = gradient(&binary, se, params.gradient_iterations)?;
    let hat = top_hat(&gray, se, params.top_hat_iterations)?;
    debug!(
        edge_pixels = grad.count(params.overlay.mask_value),
        "morphology stages done"
    );

    let result = overlay_mask(image, &grad, &params.overlay)?;

    Ok(PipelineOutput {
        gray,
        threshold: binarized.threshold,
        binary,
        eroded,
        dilated,
        opened,
        closed,
        gradient: grad,
        top_hat: hat,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use morfo_core::{AnyImage, Bgr};

    fn coins_like() -> ColorImage {
        // Two dark discs on a bright table
        let mut img = ColorImage::filled(40, 60, Bgr::new(210, 220, 230));
        for (cr, cc, rad) in [(20isize, 15isize, 8isize), (18, 42, 10)] {
            for r in 0..40isize {
                for c in 0..60isize {
                    if (r - cr).pow(2) + (c - cc).pow(2) <= rad * rad {
                        img.set(r as usize, c as usize, Bgr::new(30, 60, 90)).unwrap();
                    }
                }
            }
        }
        img
    }

    #[test]
    fn test_default_params() {
        let p = PipelineParams::default();
        assert_eq!(p.element.size(), 5);
        assert_eq!(p.opening_iterations, 2);
        assert_eq!(p.closing_iterations, 2);
        assert_eq!(p.overlay.color, Bgr::RED);
    }

    #[test]
    fn test_pipeline_shapes_and_values() {
        let img = coins_like();
        let out = run_pipeline(&img, &PipelineParams::default()).unwrap();

        for plane in [&out.gray, &out.binary, &out.eroded, &out.dilated, &out.gradient] {
            assert_eq!(plane.shape(), (40, 60));
        }
        assert_eq!(out.binary.count(0) + out.binary.count(255), 2400);
        // Discs are dark, so they are the foreground
        assert_eq!(out.binary.get(20, 15).unwrap(), 255);
        assert_eq!(out.binary.get(2, 2).unwrap(), 0);
        assert_eq!(out.result.get(2, 2).unwrap(), img.get(2, 2).unwrap());
    }

    #[test]
    fn test_pipeline_edges_are_red() {
        let img = coins_like();
        let out = run_pipeline(&img, &PipelineParams::default()).unwrap();
        assert!(out.gradient.count(255) > 0);
        for ((r, c), &g) in out.gradient.data().indexed_iter() {
            if g == 255 {
                assert_eq!(out.result.get(r, c).unwrap(), Bgr::RED);
            } else {
                assert_eq!(out.result.get(r, c).unwrap(), img.get(r, c).unwrap());
            }
        }
    }

    #[test]
    fn test_gallery_order() {
        let out = run_pipeline(&coins_like(), &PipelineParams::default()).unwrap();
        let gallery = out.into_gallery().unwrap();
        assert_eq!(gallery.len(), 9);
        assert!(gallery.is_full());
        let titles: Vec<_> = gallery.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, PANEL_TITLES);
        assert!(matches!(gallery.panels()[8].image, AnyImage::Color(_)));
        assert!(gallery.panels()[..8]
            .iter()
            .all(|p| matches!(p.image, AnyImage::Gray(_))));
    }

    #[test]
    fn test_invalid_element_rejected() {
        let params = PipelineParams {
            element: StructuringElement::Square(0),
            ..Default::default()
        };
        assert!(run_pipeline(&coins_like(), &params).is_err());
    }
}
