/// Parser for CSS `filter` shorthand strings
///
/// Accepts a whitespace separated list of `name(argument)` functions, or the
/// keyword `none`. Only the functions of the Filter Effects module are known.

use super::{FilterError, FilterOp};

/// Parse a descriptor into the operations it names, in order
pub fn parse(text: &str) -> Result<Vec<FilterOp>, FilterError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(FilterError::Empty);
    }
    if text.eq_ignore_ascii_case("none") {
        return Ok(Vec::new());
    }

    let mut ops = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let open = rest
            .find('(')
            .ok_or_else(|| FilterError::Malformed(rest.to_string()))?;
        let close = rest
            .find(')')
            .ok_or_else(|| FilterError::Malformed(rest.to_string()))?;
        if close < open {
            return Err(FilterError::Malformed(rest.to_string()));
        }

        let name = rest[..open].trim();
        let argument = rest[open + 1..close].trim();
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(FilterError::Malformed(rest.to_string()));
        }

        ops.push(parse_function(name, argument)?);
        rest = rest[close + 1..].trim_start();
    }

    Ok(ops)
}

fn parse_function(name: &str, argument: &str) -> Result<FilterOp, FilterError> {
    let op = match name.to_ascii_lowercase().as_str() {
        "brightness" => FilterOp::Brightness(amount(name, argument)?),
        "contrast" => FilterOp::Contrast(amount(name, argument)?),
        "saturate" => FilterOp::Saturate(amount(name, argument)?),
        "grayscale" => FilterOp::Grayscale(amount(name, argument)?.min(1.0)),
        "sepia" => FilterOp::Sepia(amount(name, argument)?.min(1.0)),
        "invert" => FilterOp::Invert(amount(name, argument)?.min(1.0)),
        "opacity" => FilterOp::Opacity(amount(name, argument)?.min(1.0)),
        "hue-rotate" => FilterOp::HueRotate(angle(name, argument)?),
        "blur" => FilterOp::Blur(length(name, argument)?),
        _ => return Err(FilterError::UnknownFunction(name.to_string())),
    };
    Ok(op)
}

/// `<number> | <percentage>`, non-negative, defaulting to 1
fn amount(name: &str, argument: &str) -> Result<f32, FilterError> {
    if argument.is_empty() {
        return Ok(1.0);
    }

    let value = match argument.strip_suffix('%') {
        Some(percent) => number(name, argument, percent)? / 100.0,
        None => number(name, argument, argument)?,
    };
    non_negative(name, argument, value)
}

/// `<angle>` in degrees, defaulting to 0; a bare zero is allowed
fn angle(name: &str, argument: &str) -> Result<f32, FilterError> {
    if argument.is_empty() {
        return Ok(0.0);
    }

    let lower = argument.to_ascii_lowercase();
    // "grad" must be tried before "rad"
    let degrees = if let Some(v) = lower.strip_suffix("deg") {
        number(name, argument, v)?
    } else if let Some(v) = lower.strip_suffix("grad") {
        number(name, argument, v)? * 360.0 / 400.0
    } else if let Some(v) = lower.strip_suffix("rad") {
        number(name, argument, v)?.to_degrees()
    } else if let Some(v) = lower.strip_suffix("turn") {
        number(name, argument, v)? * 360.0
    } else {
        zero_only(name, argument)?
    };
    Ok(degrees)
}

/// `<length>` in pixels, defaulting to 0; a bare zero is allowed
fn length(name: &str, argument: &str) -> Result<f32, FilterError> {
    if argument.is_empty() {
        return Ok(0.0);
    }

    let value = match argument.to_ascii_lowercase().strip_suffix("px") {
        Some(v) => number(name, argument, v)?,
        None => zero_only(name, argument)?,
    };
    non_negative(name, argument, value)
}

fn number(name: &str, argument: &str, digits: &str) -> Result<f32, FilterError> {
    digits
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(name, argument))
}

fn zero_only(name: &str, argument: &str) -> Result<f32, FilterError> {
    match number(name, argument, argument) {
        Ok(v) if v == 0.0 => Ok(0.0),
        _ => Err(invalid(name, argument)),
    }
}

fn non_negative(name: &str, argument: &str, value: f32) -> Result<f32, FilterError> {
    if value < 0.0 {
        Err(invalid(name, argument))
    } else {
        Ok(value)
    }
}

fn invalid(name: &str, argument: &str) -> FilterError {
    FilterError::InvalidArgument {
        function: name.to_string(),
        argument: argument.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_functions() {
        assert_eq!(parse("brightness(0.50)").unwrap(), vec![FilterOp::Brightness(0.5)]);
        assert_eq!(parse("grayscale(100%)").unwrap(), vec![FilterOp::Grayscale(1.0)]);
        assert_eq!(parse("hue-rotate(324deg)").unwrap(), vec![FilterOp::HueRotate(324.0)]);
        assert_eq!(parse("blur(2px)").unwrap(), vec![FilterOp::Blur(2.0)]);
        assert_eq!(parse("opacity(0.7)").unwrap(), vec![FilterOp::Opacity(0.7)]);
    }

    #[test]
    fn test_composite_keeps_order() {
        let ops = parse("sepia(50%) brightness(1.1) contrast(1.1)").unwrap();

        assert_eq!(
            ops,
            vec![
                FilterOp::Sepia(0.5),
                FilterOp::Brightness(1.1),
                FilterOp::Contrast(1.1),
            ]
        );
    }

    #[test]
    fn test_none_and_defaults() {
        assert!(parse("none").unwrap().is_empty());
        assert_eq!(parse("invert()").unwrap(), vec![FilterOp::Invert(1.0)]);
        assert_eq!(parse("hue-rotate()").unwrap(), vec![FilterOp::HueRotate(0.0)]);
        assert_eq!(parse("blur( 0 )").unwrap(), vec![FilterOp::Blur(0.0)]);
    }

    #[test]
    fn test_angle_units() {
        assert_eq!(parse("hue-rotate(0.5turn)").unwrap(), vec![FilterOp::HueRotate(180.0)]);
        assert_eq!(parse("hue-rotate(100grad)").unwrap(), vec![FilterOp::HueRotate(90.0)]);

        let FilterOp::HueRotate(deg) = parse("hue-rotate(3.14159rad)").unwrap()[0] else {
            panic!("expected hue-rotate");
        };
        assert!((deg - 180.0).abs() < 0.01);
    }

    #[test]
    fn test_amounts_clamp_where_css_does() {
        assert_eq!(parse("sepia(250%)").unwrap(), vec![FilterOp::Sepia(1.0)]);
        assert_eq!(parse("brightness(2.5)").unwrap(), vec![FilterOp::Brightness(2.5)]);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(parse("   "), Err(FilterError::Empty));
        assert!(matches!(parse("glow(1)"), Err(FilterError::UnknownFunction(_))));
        assert!(matches!(parse("brightness(-1)"), Err(FilterError::InvalidArgument { .. })));
        assert!(matches!(parse("blur(2em)"), Err(FilterError::InvalidArgument { .. })));
        assert!(matches!(parse("hue-rotate(90)"), Err(FilterError::InvalidArgument { .. })));
        assert!(matches!(parse("contrast(1.2"), Err(FilterError::Malformed(_))));
        assert!(matches!(parse("sepia 1"), Err(FilterError::Malformed(_))));
    }
}
