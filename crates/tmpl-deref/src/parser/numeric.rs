//! Integer and decimal literals.
//!
//! Decimals are read as binary64 values first and only then converted to an
//! exact rational, so `0.1` becomes the rational nearest to the float rather
//! than `1/10`.

use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;

use super::cursor::Cursor;
use crate::deref::Deref;
use crate::errors::ParseError;

/// Parse `-? digit+ ('.' digit+)?`.
///
/// The caller must have checked that the next character is `-` or an ASCII
/// digit. Once `-` or `.` is consumed the following digits are mandatory.
pub(crate) fn numeric(cursor: &mut Cursor<'_>) -> Result<Deref, ParseError> {
    let start = cursor.mark();
    let position = cursor.position();
    cursor.eat('-');
    digits(cursor)?;
    let fractional = if cursor.eat('.') {
        digits(cursor)?;
        true
    } else {
        false
    };
    let literal = cursor.since(start);
    let numeric_error = || ParseError::Numeric {
        literal: literal.to_owned(),
        position,
    };

    if fractional {
        let float = f64::from_str(literal).map_err(|_| numeric_error())?;
        BigRational::from_float(float)
            .map(Deref::Rational)
            .ok_or_else(numeric_error)
    } else {
        BigInt::from_str(literal)
            .map(Deref::Integer)
            .map_err(|_| numeric_error())
    }
}

fn digits(cursor: &mut Cursor<'_>) -> Result<(), ParseError> {
    if cursor.eat_while(|ch| ch.is_ascii_digit()).is_empty() {
        Err(cursor.error("digit"))
    } else {
        Ok(())
    }
}
