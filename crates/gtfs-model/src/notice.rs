//! Validation notices.
//!
//! A [`Notice`] is one reported violation. Rather than one type per rule, every
//! notice shares the same shape: a code, the file the offending record came
//! from, and a map of well-known [`NoticeKey`]s to values. Renderers can then
//! print any notice without knowing which rule produced it.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::code::{NoticeCode, Severity};
use crate::error::{ModelError, Result};
use crate::feed_info::{FEED_END_DATE, FEED_INFO_FILE, FEED_START_DATE};

const NOTICE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Well-known notice field keys shared by the whole rule catalog.
///
/// Declaration order is the order fields are stored and rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NoticeKey {
    CurrentDate,
    FeedStartDate,
    FeedEndDate,
    /// Name of the column the violation is about.
    FieldName,
    CompositeKeyFirstPart,
    CompositeKeySecondPart,
    CompositeKeyThirdPart,
    CompositeKeyFirstValue,
    CompositeKeySecondValue,
    CompositeKeyThirdValue,
}

impl NoticeKey {
    /// Stable identifier used in serialized reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CurrentDate => "currentDate",
            Self::FeedStartDate => "feedStartDate",
            Self::FeedEndDate => "feedEndDate",
            Self::FieldName => "fieldName",
            Self::CompositeKeyFirstPart => "compositeKeyFirstPart",
            Self::CompositeKeySecondPart => "compositeKeySecondPart",
            Self::CompositeKeyThirdPart => "compositeKeyThirdPart",
            Self::CompositeKeyFirstValue => "compositeKeyFirstValue",
            Self::CompositeKeySecondValue => "compositeKeySecondValue",
            Self::CompositeKeyThirdValue => "compositeKeyThirdValue",
        }
    }
}

impl NoticeKey {
    /// Keys whose values are calendar dates.
    pub fn is_date(&self) -> bool {
        matches!(
            self,
            Self::CurrentDate | Self::FeedStartDate | Self::FeedEndDate
        )
    }

    fn parse_value(self, raw: String) -> Result<NoticeValue> {
        if !self.is_date() {
            return Ok(NoticeValue::Text(raw));
        }
        NaiveDate::parse_from_str(&raw, NOTICE_DATE_FORMAT)
            .map(NoticeValue::Date)
            .map_err(|_| ModelError::InvalidFieldDate {
                key: self,
                value: raw,
            })
    }
}

impl fmt::Display for NoticeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notice field value.
///
/// Serialized as a bare string. On the way back in, the variant is chosen by
/// the field key (see [`NoticeKey::is_date`]), not by the string's shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NoticeValue {
    Date(NaiveDate),
    Text(String),
}

impl NoticeValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Date(_) => None,
        }
    }
}

impl fmt::Display for NoticeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format(NOTICE_DATE_FORMAT)),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<NaiveDate> for NoticeValue {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<String> for NoticeValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for NoticeValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Natural key of up to three parts identifying the offending entity.
///
/// Parts are stored in the order the rule supplies them; consumers only rely
/// on position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeKey {
    parts: [(&'static str, String); 3],
}

impl CompositeKey {
    pub fn new(
        first: (&'static str, impl Into<String>),
        second: (&'static str, impl Into<String>),
        third: (&'static str, impl Into<String>),
    ) -> Self {
        Self {
            parts: [
                (first.0, first.1.into()),
                (second.0, second.1.into()),
                (third.0, third.1.into()),
            ],
        }
    }

    fn write_into(self, fields: &mut BTreeMap<NoticeKey, NoticeValue>) {
        let [first, second, third] = self.parts;
        let slots = [
            (
                NoticeKey::CompositeKeyFirstPart,
                NoticeKey::CompositeKeyFirstValue,
                first,
            ),
            (
                NoticeKey::CompositeKeySecondPart,
                NoticeKey::CompositeKeySecondValue,
                second,
            ),
            (
                NoticeKey::CompositeKeyThirdPart,
                NoticeKey::CompositeKeyThirdValue,
                third,
            ),
        ];
        for (part_key, value_key, (name, value)) in slots {
            fields.insert(part_key, NoticeValue::from(name));
            fields.insert(value_key, NoticeValue::Text(value));
        }
    }
}

/// One reported violation. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNotice")]
pub struct Notice {
    code: NoticeCode,
    severity: Severity,
    filename: String,
    fields: BTreeMap<NoticeKey, NoticeValue>,
}

impl Notice {
    /// Build a notice from an arbitrary field map.
    ///
    /// Fails if the filename is empty or any key required by `code` is absent.
    pub fn new(
        code: NoticeCode,
        filename: impl Into<String>,
        fields: BTreeMap<NoticeKey, NoticeValue>,
    ) -> Result<Self> {
        let filename = filename.into();
        if filename.trim().is_empty() {
            return Err(ModelError::EmptyFilename { code });
        }
        if let Some(key) = code
            .required_keys()
            .iter()
            .find(|key| !fields.contains_key(key))
        {
            return Err(ModelError::MissingNoticeField { code, key: *key });
        }
        Ok(Self {
            code,
            severity: code.severity(),
            filename,
            fields,
        })
    }

    /// Feed info whose end date falls before a coverage threshold.
    pub fn feed_expiry(
        code: NoticeCode,
        current_date: NaiveDate,
        end_date: NaiveDate,
        key: CompositeKey,
    ) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(NoticeKey::CurrentDate, NoticeValue::Date(current_date));
        fields.insert(NoticeKey::FeedEndDate, NoticeValue::Date(end_date));
        fields.insert(NoticeKey::FieldName, NoticeValue::from(FEED_END_DATE));
        key.write_into(&mut fields);
        Self::assemble(code, FEED_INFO_FILE, fields)
    }

    /// Feed info whose start date falls after its end date.
    pub fn feed_date_order(start_date: NaiveDate, end_date: NaiveDate, key: CompositeKey) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(NoticeKey::FeedStartDate, NoticeValue::Date(start_date));
        fields.insert(NoticeKey::FeedEndDate, NoticeValue::Date(end_date));
        fields.insert(NoticeKey::FieldName, NoticeValue::from(FEED_START_DATE));
        key.write_into(&mut fields);
        Self::assemble(NoticeCode::E037, FEED_INFO_FILE, fields)
    }

    fn assemble(
        code: NoticeCode,
        filename: &str,
        fields: BTreeMap<NoticeKey, NoticeValue>,
    ) -> Self {
        debug_assert!(
            code.required_keys().iter().all(|k| fields.contains_key(k)),
            "typed constructor left {code} incomplete"
        );
        Self {
            code,
            severity: code.severity(),
            filename: filename.to_string(),
            fields,
        }
    }

    pub fn code(&self) -> NoticeCode {
        self.code
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Look up a field value.
    pub fn get(&self, key: NoticeKey) -> Option<&NoticeValue> {
        self.fields.get(&key)
    }

    /// Iterate fields in key order.
    pub fn fields(&self) -> impl Iterator<Item = (NoticeKey, &NoticeValue)> {
        self.fields.iter().map(|(key, value)| (*key, value))
    }

    /// Human-readable rule description for this notice.
    pub fn title(&self) -> &'static str {
        self.code.title()
    }
}

/// Wire form checked through [`Notice::new`] on deserialization.
#[derive(Deserialize)]
struct RawNotice {
    code: NoticeCode,
    filename: String,
    fields: BTreeMap<NoticeKey, String>,
}

impl TryFrom<RawNotice> for Notice {
    type Error = ModelError;

    fn try_from(raw: RawNotice) -> Result<Self> {
        let fields = raw
            .fields
            .into_iter()
            .map(|(key, value)| key.parse_value(value).map(|value| (key, value)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        Notice::new(raw.code, raw.filename, fields)
    }
}

impl Index<NoticeKey> for Notice {
    type Output = NoticeValue;

    fn index(&self, key: NoticeKey) -> &Self::Output {
        match self.fields.get(&key) {
            Some(value) => value,
            None => panic!("notice {} has no field {key}", self.code),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}): {}",
            self.severity.label(),
            self.code,
            self.filename,
            self.code.title()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn key() -> CompositeKey {
        CompositeKey::new(("a", "1"), ("b", "2"), ("c", "3"))
    }

    #[test]
    fn test_new_rejects_missing_field() {
        let mut fields = BTreeMap::new();
        fields.insert(NoticeKey::CurrentDate, NoticeValue::Date(date(2024, 1, 1)));

        let err = Notice::new(NoticeCode::E038, "feed_info.txt", fields).unwrap_err();
        assert_eq!(
            err,
            ModelError::MissingNoticeField {
                code: NoticeCode::E038,
                key: NoticeKey::FeedEndDate,
            }
        );
    }

    #[test]
    fn test_new_rejects_empty_filename() {
        let notice = Notice::feed_expiry(NoticeCode::E038, date(2024, 1, 1), date(2024, 1, 2), key());
        let fields = notice.fields().map(|(k, v)| (k, v.clone())).collect();

        let err = Notice::new(NoticeCode::E038, "  ", fields).unwrap_err();
        assert_eq!(err, ModelError::EmptyFilename { code: NoticeCode::E038 });
    }

    #[test]
    fn test_new_accepts_complete_fields() {
        let built = Notice::feed_expiry(NoticeCode::W009, date(2024, 1, 1), date(2024, 1, 2), key());
        let fields = built.fields().map(|(k, v)| (k, v.clone())).collect();

        let notice = Notice::new(NoticeCode::W009, FEED_INFO_FILE, fields).unwrap();
        assert_eq!(notice, built);
        assert_eq!(notice.severity(), Severity::Warning);
    }

    #[test]
    fn test_composite_key_slots() {
        let notice = Notice::feed_date_order(date(2024, 2, 1), date(2024, 1, 1), key());

        assert_eq!(notice[NoticeKey::CompositeKeyFirstPart].to_string(), "a");
        assert_eq!(notice[NoticeKey::CompositeKeySecondPart].to_string(), "b");
        assert_eq!(notice[NoticeKey::CompositeKeyThirdPart].to_string(), "c");
        assert_eq!(notice[NoticeKey::CompositeKeyFirstValue].to_string(), "1");
        assert_eq!(notice[NoticeKey::CompositeKeySecondValue].to_string(), "2");
        assert_eq!(notice[NoticeKey::CompositeKeyThirdValue].to_string(), "3");
        assert_eq!(notice[NoticeKey::FieldName].to_string(), "feed_start_date");
        assert!(notice.get(NoticeKey::CurrentDate).is_none());
    }

    #[test]
    #[should_panic(expected = "has no field currentDate")]
    fn test_index_unset_key_panics() {
        let notice = Notice::feed_date_order(date(2024, 2, 1), date(2024, 1, 1), key());
        let _ = &notice[NoticeKey::CurrentDate];
    }

    #[test]
    fn test_only_date_keys_are_dates() {
        assert!(NoticeKey::CurrentDate.is_date());
        assert!(NoticeKey::FeedStartDate.is_date());
        assert!(NoticeKey::FeedEndDate.is_date());
        assert!(!NoticeKey::FieldName.is_date());
        assert!(!NoticeKey::CompositeKeyFirstValue.is_date());
    }

    #[test]
    fn test_date_value_display() {
        assert_eq!(NoticeValue::Date(date(2024, 3, 9)).to_string(), "2024-03-09");
        assert_eq!(NoticeValue::from("x").as_text(), Some("x"));
        assert_eq!(NoticeValue::Date(date(2024, 3, 9)).as_text(), None);
    }
}
