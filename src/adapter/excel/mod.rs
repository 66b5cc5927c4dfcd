//! Excel Workbook Access
//!
//! calamine でワークブックを読み込み、検証前の行に変換する

pub mod workbook;

pub use workbook::read_sheet_rows;
