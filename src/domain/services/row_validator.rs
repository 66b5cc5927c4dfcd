//! # Row Validator
//!
//! シート行を支払条件に変換する検証ルール

use log::debug;

use crate::domain::entities::payment_term::PaymentTerm;
use crate::domain::entities::raw_row::{CellValue, RawTermRow};

/// 行検証サービス
///
/// 変換できない行は黙って除外する（エラーにはしない）
pub struct RowValidator;

impl RowValidator {
    /// 行を検証して支払条件のリストを返す
    ///
    /// # Arguments
    ///
    /// * `rows` - 検証前の行（シート順）
    ///
    /// # Returns
    ///
    /// 検証を通過した支払条件（入力順）。1件も通過しなければ空
    pub fn validate(rows: Vec<RawTermRow>) -> Vec<PaymentTerm> {
        rows.into_iter().filter_map(Self::validate_row).collect()
    }

    /// 1行を検証する
    pub fn validate_row(row: RawTermRow) -> Option<PaymentTerm> {
        let (name_cell, days_cell) = match (row.name, row.discount_days) {
            (Some(n), Some(d)) if !n.is_blank() && !d.is_blank() => (n, d),
            _ => {
                debug!("Row {}: missing name or discount days, skipped", row.row_number);
                return None;
            }
        };

        let Some(discount_days) = Self::coerce_days(&days_cell) else {
            debug!(
                "Row {}: invalid discount days {:?}, skipped",
                row.row_number, days_cell
            );
            return None;
        };

        match PaymentTerm::new(Self::cell_text(&name_cell), discount_days) {
            Ok(term) => Some(term),
            Err(e) => {
                debug!("Row {}: {}, skipped", row.row_number, e);
                None
            }
        }
    }

    /// セルを名前用の文字列に変換
    pub fn cell_text(cell: &CellValue) -> String {
        match cell {
            CellValue::Text(s) => s.clone(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => {
                if f.fract() == 0.0 && f.is_finite() {
                    (*f as i64).to_string()
                } else {
                    f.to_string()
                }
            }
            CellValue::Bool(b) => b.to_string(),
            CellValue::Date(s) => s.clone(),
        }
    }

    /// セルを日数に変換（整数 → 浮動小数点の切り捨ての順に試す）
    pub fn coerce_days(cell: &CellValue) -> Option<i64> {
        match cell {
            CellValue::Int(i) => Some(*i),
            CellValue::Float(f) => Self::truncate_float(*f),
            CellValue::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(Self::truncate_float))
            }
            CellValue::Bool(_) | CellValue::Date(_) => None,
        }
    }

    fn truncate_float(f: f64) -> Option<i64> {
        // i64::MAX as f64 は 2^63 に丸められるため上限は未満で比較する
        if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 {
            Some(f.trunc() as i64)
        } else {
            None
        }
    }
}
