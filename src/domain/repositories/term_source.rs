//! # Term Source Trait
//!
//! 支払条件シートの読み込みを抽象化

use async_trait::async_trait;
use std::path::Path;

use crate::domain::entities::raw_row::RawTermRow;
use crate::domain::error::ImportError;

/// 支払条件の読み込み元
///
/// ヘッダー行を除いたデータ行を、検証前の形でそのまま返す
#[async_trait]
pub trait TermSource: Send + Sync {
    /// シートのデータ行を読み込む
    ///
    /// # Arguments
    ///
    /// * `path` - ワークブックのパス
    /// * `sheet` - シート名
    ///
    /// # Returns
    ///
    /// 2行目以降の行（A列とB列のみ）
    ///
    /// # Errors
    ///
    /// ファイルが存在しない、開けない、シートがない場合にエラーを返す。
    /// 行単位の不正はエラーにしない。
    async fn read_rows(&self, path: &Path, sheet: &str) -> Result<Vec<RawTermRow>, ImportError>;
}
