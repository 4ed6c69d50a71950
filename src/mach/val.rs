/// ## Register value
///
/// Either a double or a string; never both, never empty.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(f64),
    Text(String),
}

impl Default for Val {
    fn default() -> Self {
        Val::Number(0.0)
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Number(n) => write!(f, "{} (number)", fmt_register(*n)),
            Val::Text(s) => write!(f, "\"{}\" (string)", s),
        }
    }
}

fn non_finite(n: f64) -> Option<&'static str> {
    if n.is_nan() {
        Some("nan")
    } else if n == f64::INFINITY {
        Some("inf")
    } else if n == f64::NEG_INFINITY {
        Some("-inf")
    } else {
        None
    }
}

fn trim_fraction(mut s: String) -> String {
    if s.contains('.') {
        let len = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(len);
    }
    s
}

/// Three decimals with the zeros and dot trimmed: `2.5`, `42`, `0.333`.
pub fn fmt_register(n: f64) -> String {
    if let Some(s) = non_finite(n) {
        return s.to_string();
    }
    trim_fraction(format!("{:.3}", n))
}

/// Six decimals, untrimmed: `3.000000`.
pub fn fmt_coerced(n: f64) -> String {
    if let Some(s) = non_finite(n) {
        return s.to_string();
    }
    format!("{:.6}", n)
}

/// Six significant digits, fixed or scientific by magnitude like `%g`.
pub fn fmt_general(n: f64) -> String {
    const PRECISION: i32 = 6;
    if let Some(s) = non_finite(n) {
        return s.to_string();
    }
    if n == 0.0 {
        let zero = if n.is_sign_negative() { "-0" } else { "0" };
        return zero.to_string();
    }
    // Rounding to the precision first decides the exponent, 999999.5 is 1e+06.
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, n);
    let (mantissa, exp) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if exp < -4 || exp >= PRECISION {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa.to_string()), sign, exp.abs())
    } else {
        let decimals = (PRECISION - 1 - exp) as usize;
        trim_fraction(format!("{:.*}", decimals, n))
    }
}
