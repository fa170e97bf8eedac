//! Piecewise linear color scales
//!
//! A [`LinearColorScale`] maps numbers onto colors by interpolating each RGB
//! channel between the range colors of the bracketing domain breakpoints.

use log::debug;

use crate::{
    blend::round_half_up,
    colors::{hex_string, RgbColor},
    error::{ColorError, ColorResult},
};

/// Maps values in an ascending domain onto a range of colors
#[derive(Debug, Clone, PartialEq)]
pub struct LinearColorScale {
    domain: Vec<f64>,
    range: Vec<String>,
    range_colors: Vec<RgbColor>,
    clamp: bool,
}

impl LinearColorScale {
    /// Creates a scale, validating that the domain is non-empty, strictly
    /// ascending, matches the range in length, and that every range entry
    /// is a parsable color.
    pub fn new(domain: Vec<f64>, range: Vec<String>, clamp: bool) -> ColorResult<Self> {
        let rendered = format!("{:?}", domain);

        if domain.is_empty() {
            return Err(ColorError::scale(
                rendered.clone(),
                (0, rendered.len()),
                "domain must not be empty",
            )
            .into());
        }

        if domain.len() != range.len() {
            return Err(ColorError::scale(
                rendered.clone(),
                (0, rendered.len()),
                format!(
                    "domain has {} breakpoints but range has {} colors",
                    domain.len(),
                    range.len()
                ),
            )
            .into());
        }

        if let Some(pair) = domain.windows(2).find(|pair| !(pair[0] < pair[1])) {
            return Err(ColorError::scale(
                rendered.clone(),
                (0, rendered.len()),
                format!("domain must be strictly ascending ({} then {})", pair[0], pair[1]),
            )
            .into());
        }

        let range_colors = range
            .iter()
            .map(|color| {
                color.parse::<RgbColor>().map_err(|_| {
                    miette::Report::from(ColorError::scale(
                        color.clone(),
                        (0, color.len()),
                        format!("range color {:?} is not a valid color", color),
                    ))
                })
            })
            .collect::<ColorResult<Vec<_>>>()?;

        Ok(Self {
            domain,
            range,
            range_colors,
            clamp,
        })
    }

    /// Returns the color for `value`.
    ///
    /// - An absent value is treated as `0`.
    /// - `NaN` yields `Ok(None)`, meaning "no color".
    /// - With clamping, values at or past either end snap to the end color.
    /// - Exact breakpoints return their range string verbatim.
    /// - Without clamping, values outside the domain are an
    ///   [`ColorError::OutOfDomain`] error.
    pub fn color_for(&self, value: Option<f64>) -> ColorResult<Option<String>> {
        let value = value.unwrap_or(0.0);
        if value.is_nan() {
            return Ok(None);
        }

        let last = self.domain.len() - 1;
        let (min, max) = (self.domain[0], self.domain[last]);

        if self.clamp {
            if value >= max {
                return Ok(Some(self.range[last].clone()));
            }
            if value <= min {
                return Ok(Some(self.range[0].clone()));
            }
        }

        if let Some(index) = self.domain.iter().position(|&breakpoint| breakpoint == value) {
            return Ok(Some(self.range[index].clone()));
        }

        for (index, pair) in self.domain.windows(2).enumerate() {
            let (domain_min, domain_max) = (pair[0], pair[1]);
            if value >= domain_min && value <= domain_max {
                let from = &self.range_colors[index];
                let to = &self.range_colors[index + 1];

                let channel = |lo: i32, hi: i32| {
                    let lo = f64::from(lo);
                    let hi = f64::from(hi);
                    round_half_up((value - domain_min) * (hi - lo) / (domain_max - domain_min) + lo)
                        as i32
                };

                let color = RgbColor::rgb(
                    channel(from.r, to.r),
                    channel(from.g, to.g),
                    channel(from.b, to.b),
                );
                return Ok(Some(hex_string(&color)));
            }
        }

        debug!(
            "value {} is outside the unclamped scale domain [{}, {}]",
            value, min, max
        );
        Err(ColorError::out_of_domain(value, min, max).into())
    }

    /// Turns the scale into a plain function value
    pub fn into_fn(self) -> impl Fn(Option<f64>) -> ColorResult<Option<String>> {
        move |value| self.color_for(value)
    }

    pub fn domain(&self) -> &[f64] {
        &self.domain
    }

    pub fn range(&self) -> &[String] {
        &self.range
    }

    pub fn is_clamped(&self) -> bool {
        self.clamp
    }
}

/// Builds a [`LinearColorScale`] from borrowed breakpoints and colors
pub fn create_linear_color_scale<S: AsRef<str>>(
    domain: &[f64],
    range: &[S],
    clamp: bool,
) -> ColorResult<LinearColorScale> {
    LinearColorScale::new(
        domain.to_vec(),
        range.iter().map(|color| color.as_ref().to_owned()).collect(),
        clamp,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scale_error(report: miette::Report) -> String {
        match report.downcast_ref::<ColorError>() {
            Some(ColorError::Scale { msg, .. }) => msg.clone(),
            other => panic!("Wrong error variant: {:?}", other),
        }
    }

    #[test]
    fn test_clamped_midpoint_and_ends() {
        let scale = create_linear_color_scale(&[0.0, 10.0], &["#000000", "#FFFFFF"], true).unwrap();

        assert_eq!(scale.color_for(Some(5.0)).unwrap().as_deref(), Some("#808080"));
        assert_eq!(scale.color_for(Some(20.0)).unwrap().as_deref(), Some("#FFFFFF"));
        assert_eq!(scale.color_for(Some(-3.0)).unwrap().as_deref(), Some("#000000"));
    }

    #[test]
    fn test_absent_value_is_zero() {
        let scale = create_linear_color_scale(&[-10.0, 10.0], &["#000000", "#FFFFFF"], false).unwrap();
        assert_eq!(scale.color_for(None).unwrap().as_deref(), Some("#808080"));
    }

    #[test]
    fn test_nan_is_no_color() {
        let scale = create_linear_color_scale(&[0.0, 10.0], &["#000000", "#FFFFFF"], true).unwrap();
        assert_eq!(scale.color_for(Some(f64::NAN)).unwrap(), None);
    }

    #[test]
    fn test_breakpoints_return_range_verbatim() {
        let scale = create_linear_color_scale(
            &[0.0, 50.0, 100.0],
            &["#f00", "rgb(0, 255, 0)", "#0000ff"],
            false,
        )
        .unwrap();

        assert_eq!(scale.color_for(Some(0.0)).unwrap().as_deref(), Some("#f00"));
        assert_eq!(
            scale.color_for(Some(50.0)).unwrap().as_deref(),
            Some("rgb(0, 255, 0)")
        );
        assert_eq!(scale.color_for(Some(100.0)).unwrap().as_deref(), Some("#0000ff"));
    }

    #[test]
    fn test_interpolates_within_bracket() {
        let scale = create_linear_color_scale(
            &[0.0, 50.0, 100.0],
            &["#FF0000", "#00FF00", "#0000FF"],
            false,
        )
        .unwrap();

        assert_eq!(scale.color_for(Some(25.0)).unwrap().as_deref(), Some("#808000"));
        assert_eq!(scale.color_for(Some(75.0)).unwrap().as_deref(), Some("#008080"));
    }

    #[test]
    fn test_unclamped_out_of_domain_is_error() {
        let scale = create_linear_color_scale(&[0.0, 10.0], &["#000000", "#FFFFFF"], false).unwrap();
        let report = scale.color_for(Some(20.0)).unwrap_err();

        match report.downcast_ref::<ColorError>() {
            Some(ColorError::OutOfDomain {
                value, min, max, ..
            }) => {
                assert_eq!((*value, *min, *max), (20.0, 0.0, 10.0));
            }
            other => panic!("Wrong error variant: {:?}", other),
        }
    }

    #[test]
    fn test_single_breakpoint() {
        let scale = create_linear_color_scale(&[5.0], &["#123456"], false).unwrap();
        assert_eq!(scale.color_for(Some(5.0)).unwrap().as_deref(), Some("#123456"));
        assert!(scale.color_for(Some(6.0)).is_err());

        let clamped = create_linear_color_scale(&[5.0], &["#123456"], true).unwrap();
        assert_eq!(clamped.color_for(Some(-1.0)).unwrap().as_deref(), Some("#123456"));
    }

    #[test]
    fn test_invalid_definitions() {
        let empty: [&str; 0] = [];
        let msg = scale_error(create_linear_color_scale(&[], &empty, true).unwrap_err());
        assert_eq!(msg, "domain must not be empty");

        let msg = scale_error(
            create_linear_color_scale(&[0.0, 1.0], &["#000000"], true).unwrap_err(),
        );
        assert_eq!(msg, "domain has 2 breakpoints but range has 1 colors");

        let msg = scale_error(
            create_linear_color_scale(&[1.0, 1.0], &["#000000", "#FFFFFF"], true).unwrap_err(),
        );
        assert_eq!(msg, "domain must be strictly ascending (1 then 1)");

        let msg = scale_error(
            create_linear_color_scale(&[0.0, 1.0], &["#000000", "white"], true).unwrap_err(),
        );
        assert_eq!(msg, "range color \"white\" is not a valid color");
    }

    #[test]
    fn test_into_fn() {
        let scale = create_linear_color_scale(&[0.0, 10.0], &["#000000", "#FFFFFF"], true)
            .unwrap()
            .into_fn();

        assert_eq!(scale(Some(10.0)).unwrap().as_deref(), Some("#FFFFFF"));
        assert_eq!(scale(Some(5.0)).unwrap().as_deref(), Some("#808080"));
    }
}
