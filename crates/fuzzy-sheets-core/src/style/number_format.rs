//! Number format types

/// Number format for cell display
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NumberFormat {
    /// General format (default)
    #[default]
    General,

    /// Built-in format by ID
    BuiltIn(u32),

    /// Custom format string
    Custom(String),
}

impl NumberFormat {
    // Built-in format IDs
    /// 1 - 0
    pub const ID_NUMBER_INT: u32 = 1;
    /// 2 - 0.00
    pub const ID_NUMBER_DEC2: u32 = 2;
    /// 14 - mm-dd-yy
    pub const ID_DATE_SHORT: u32 = 14;
    /// 49 - @
    pub const ID_TEXT: u32 = 49;

    /// Create a number format from a format code
    ///
    /// `""` and `"General"` map to [`NumberFormat::General`]; anything else is
    /// kept verbatim as a custom code.
    pub fn from_string<S: Into<String>>(format: S) -> Self {
        let format = format.into();
        if format.is_empty() || format.eq_ignore_ascii_case("General") {
            NumberFormat::General
        } else {
            NumberFormat::Custom(format)
        }
    }

    /// Integer format (0)
    pub fn integer() -> Self {
        NumberFormat::BuiltIn(Self::ID_NUMBER_INT)
    }

    /// Decimal format (0.00)
    pub fn decimal() -> Self {
        NumberFormat::BuiltIn(Self::ID_NUMBER_DEC2)
    }

    /// Fixed number of decimal places (`0`, `0.0`, `0.00`, ...)
    pub fn fixed_decimals(places: u32) -> Self {
        match places {
            0 => Self::integer(),
            2 => Self::decimal(),
            n => NumberFormat::Custom(format!("0.{}", "0".repeat(n as usize))),
        }
    }

    /// Short date (mm-dd-yy)
    pub fn date_short() -> Self {
        NumberFormat::BuiltIn(Self::ID_DATE_SHORT)
    }

    /// Text format (@)
    pub fn text() -> Self {
        NumberFormat::BuiltIn(Self::ID_TEXT)
    }

    /// Get the format string
    pub fn format_string(&self) -> &str {
        match self {
            NumberFormat::General => "General",
            NumberFormat::BuiltIn(id) => Self::builtin_format_string(*id),
            NumberFormat::Custom(s) => s,
        }
    }

    /// Get built-in format string by ID
    fn builtin_format_string(id: u32) -> &'static str {
        match id {
            1 => "0",
            2 => "0.00",
            3 => "#,##0",
            4 => "#,##0.00",
            9 => "0%",
            10 => "0.00%",
            11 => "0.00E+00",
            14 => "mm-dd-yy",
            15 => "d-mmm-yy",
            16 => "d-mmm",
            17 => "mmm-yy",
            18 => "h:mm AM/PM",
            19 => "h:mm:ss AM/PM",
            20 => "h:mm",
            21 => "h:mm:ss",
            22 => "m/d/yy h:mm",
            45 => "mm:ss",
            46 => "[h]:mm:ss",
            47 => "mmss.0",
            49 => "@",
            _ => "General",
        }
    }

    /// Check whether values under this format display as a date or time
    ///
    /// Spreadsheet files store dates as serial numbers, so readers use this to
    /// decide whether a number is really a date.
    pub fn is_date_format(&self) -> bool {
        match self {
            NumberFormat::General => false,
            NumberFormat::BuiltIn(id) => matches!(id, 14..=22 | 45..=47),
            NumberFormat::Custom(code) => code_has_date_tokens(code),
        }
    }
}

/// Scan the first section of a format code for date/time placeholders,
/// skipping quoted literals, escaped characters, fill/padding characters and
/// bracketed modifiers other than elapsed time (`[h]`, `[mm]`, `[ss]`)
fn code_has_date_tokens(code: &str) -> bool {
    let section = code.split(';').next().unwrap_or_default();
    let mut chars = section.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                for q in chars.by_ref() {
                    if q == '"' {
                        break;
                    }
                }
            }
            '\\' | '_' | '*' => {
                chars.next();
            }
            '[' => {
                let inner: String = chars.by_ref().take_while(|&b| b != ']').collect();
                let inner = inner.to_ascii_lowercase();
                if !inner.is_empty() && inner.chars().all(|b| matches!(b, 'h' | 'm' | 's')) {
                    return true;
                }
            }
            'y' | 'Y' | 'm' | 'M' | 'd' | 'D' | 'h' | 'H' | 's' | 'S' => return true,
            _ => {}
        }
    }
    false
}
