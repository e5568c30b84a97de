//! # calendari-classify
//!
//! Classifies calendar days against three yearless annotation tables and
//! composes their label text.
//!
//! Classification follows a fixed priority, highest first:
//!
//! 1. falla day → [`Classification::Falla`]
//! 2. special event → [`Classification::Event`]
//! 3. named holiday → [`Classification::Holiday`]
//! 4. Saturday or Sunday → [`Classification::Weekend`]
//! 5. otherwise → [`Classification::Normal`]
//!
//! The label is computed separately and folds lower-priority matches into
//! the text, so a falla day that is also a holiday reads
//! `"Falla (Festivo: San José)"`.
//!
//! # Quick start
//!
//! ```
//! use calendari_calendar::MonthDay;
//! use calendari_classify::{AnnotationTables, Classification, classify, compose_label};
//!
//! let tables = AnnotationTables::builtin();
//! let key: MonthDay = "01-19".parse().unwrap();
//!
//! let verdict = classify(tables, key, 6);
//! assert_eq!(verdict.classification, Classification::Falla);
//! assert_eq!(
//!     compose_label(tables, key).as_deref(),
//!     Some("Falla – Presentación Falleras Mayores")
//! );
//! ```

pub mod classification;
pub mod classifier;
pub mod error;
pub mod tables;

pub use classification::Classification;
pub use classifier::{
    Annotations, DayInfo, FALLA_LABEL, Verdict, classify, classify_date, compose_label,
    describe_day,
};
pub use error::TablesError;
pub use tables::AnnotationTables;
