//! Range-checked character codes for the numeric escapes
//!
//! An octal escape is `\0` plus two octal digits and a unicode escape is `\u`
//! plus four hex digits, so each code type only admits values that fit.

use thiserror::Error;

/// A code that does not fit the escape it was meant for
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    #[error("octal code {0:#o} needs more than two octal digits")]
    Octal(u8),

    #[error("U+{0:04X} is not a Basic Multilingual Plane scalar value")]
    Unicode(u32),
}

/// Character code in `0o0..=0o77`, written as `\0oo`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OctalCode(u8);

impl OctalCode {
    pub const MAX: u8 = 0o77;

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for OctalCode {
    type Error = CodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        if code <= Self::MAX {
            Ok(Self(code))
        } else {
            Err(CodeError::Octal(code))
        }
    }
}

/// A Basic Multilingual Plane scalar value, written as `\uhhhh`.
///
/// Surrogate code units are excluded; neither engine accepts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BmpChar(u16);

impl BmpChar {
    pub fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for BmpChar {
    type Error = CodeError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        if (0xD800..=0xDFFF).contains(&code) {
            Err(CodeError::Unicode(code.into()))
        } else {
            Ok(Self(code))
        }
    }
}

impl TryFrom<char> for BmpChar {
    type Error = CodeError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        u16::try_from(u32::from(c))
            .map(Self)
            .map_err(|_| CodeError::Unicode(c.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octal_range() {
        assert_eq!(OctalCode::try_from(0o40).unwrap().get(), 0o40);
        assert_eq!(OctalCode::try_from(0).unwrap().get(), 0);
        assert!(OctalCode::try_from(0o77).is_ok());
        assert_eq!(OctalCode::try_from(0o100), Err(CodeError::Octal(0o100)));
        assert_eq!(OctalCode::try_from(b'A'), Err(CodeError::Octal(b'A')));
    }

    #[test]
    fn test_surrogates_rejected() {
        assert_eq!(BmpChar::try_from(0x0020u16).unwrap().get(), 0x20);
        assert!(BmpChar::try_from(0xD7FFu16).is_ok());
        assert!(BmpChar::try_from(0xE000u16).is_ok());
        assert_eq!(BmpChar::try_from(0xD800u16), Err(CodeError::Unicode(0xD800)));
        assert_eq!(BmpChar::try_from(0xDFFFu16), Err(CodeError::Unicode(0xDFFF)));
    }

    #[test]
    fn test_chars_outside_bmp_rejected() {
        assert_eq!(BmpChar::try_from('é').unwrap().get(), 0xE9);
        assert_eq!(BmpChar::try_from('😀'), Err(CodeError::Unicode(0x1F600)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CodeError::Octal(0o101).to_string(),
            "octal code 0o101 needs more than two octal digits"
        );
        assert_eq!(
            CodeError::Unicode(0xD800).to_string(),
            "U+D800 is not a Basic Multilingual Plane scalar value"
        );
    }
}
