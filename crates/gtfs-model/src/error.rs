use thiserror::Error;

use crate::code::NoticeCode;
use crate::notice::NoticeKey;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("notice {code} is missing required field {key}")]
    MissingNoticeField { code: NoticeCode, key: NoticeKey },
    #[error("notice {code} has an empty filename")]
    EmptyFilename { code: NoticeCode },
    #[error("notice field {key} holds '{value}', expected a YYYY-MM-DD date")]
    InvalidFieldDate { key: NoticeKey, value: String },
    #[error("unknown notice code: {0}")]
    UnknownCode(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
