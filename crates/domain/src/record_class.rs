use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordClass {
    In,
    Ch,
    Hs,
    None,
    Any,
}

impl RecordClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordClass::In => "IN",
            RecordClass::Ch => "CH",
            RecordClass::Hs => "HS",
            RecordClass::None => "NONE",
            RecordClass::Any => "ANY",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordClass::In => 1,
            RecordClass::Ch => 3,
            RecordClass::Hs => 4,
            RecordClass::None => 254,
            RecordClass::Any => 255,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(RecordClass::In),
            3 => Some(RecordClass::Ch),
            4 => Some(RecordClass::Hs),
            254 => Some(RecordClass::None),
            255 => Some(RecordClass::Any),
            _ => None,
        }
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IN" => Ok(RecordClass::In),
            "CH" => Ok(RecordClass::Ch),
            "HS" => Ok(RecordClass::Hs),
            "NONE" => Ok(RecordClass::None),
            "ANY" => Ok(RecordClass::Any),
            _ => Err(format!("Unknown record class: {}", s)),
        }
    }
}
