//! # Raw Term Row
//!
//! 検証前のシート行（Excelのセル型からは独立した表現）

/// セルの値
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// 日付・時刻セル（表示用の文字列）
    Date(String),
}

impl CellValue {
    /// 空のテキストセルかどうか
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Text(s) if s.is_empty())
    }
}

/// 検証前の1行（A列: 名前, B列: 日数）
#[derive(Debug, Clone, PartialEq)]
pub struct RawTermRow {
    /// シート上の行番号（1始まり、ヘッダーが1行目）
    pub row_number: usize,
    pub name: Option<CellValue>,
    pub discount_days: Option<CellValue>,
}

impl RawTermRow {
    pub fn new(
        row_number: usize,
        name: Option<CellValue>,
        discount_days: Option<CellValue>,
    ) -> Self {
        Self {
            row_number,
            name,
            discount_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(CellValue::Text(String::new()).is_blank());
        assert!(!CellValue::Text(" ".to_string()).is_blank());
        assert!(!CellValue::Int(0).is_blank());
    }
}
