mod parse;

use crate::error::{ExprStatError, Result};

pub use self::parse::lenient_f64;

/// TextMatrix構造体: テキストセルの矩形グリッド
///
/// 遺伝子発現行列のように、数値がテキストとして格納された行列を表す。
/// 全行が同じ列数を持つことは構築時に保証される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMatrix {
    /// 行ごとのセル値
    rows: Vec<Vec<String>>,

    /// 列数（全行で共通）
    column_count: usize,
}

// 基本実装
impl TextMatrix {
    /// 指定した列数で空のTextMatrixを作成
    pub fn new(column_count: usize) -> Self {
        TextMatrix {
            rows: Vec::new(),
            column_count,
        }
    }

    /// 行のベクトルからTextMatrixを作成
    ///
    /// 最初の行が列数を決定する。長さの異なる行が含まれる場合、
    /// どの行も処理される前にエラーを返す。
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self> {
        let column_count = rows.first().map_or(0, |row| row.len());

        for (i, row) in rows.iter().enumerate() {
            if row.len() != column_count {
                return Err(ExprStatError::InconsistentRowLength {
                    row: i,
                    expected: column_count,
                    found: row.len(),
                });
            }
        }

        Ok(TextMatrix { rows, column_count })
    }

    /// 検証済みの行と列数から直接構築する内部コンストラクタ
    pub(crate) fn from_parts(rows: Vec<Vec<String>>, column_count: usize) -> Self {
        TextMatrix { rows, column_count }
    }

    /// 行数を取得
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 列数を取得
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// 行が存在しないかどうか
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 位置からセル値を取得
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .map(|cell| cell.as_str())
    }

    /// 行をスライスとして取得
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(|cells| cells.as_slice())
    }

    /// 全行のイテレータを取得
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(|cells| cells.as_slice())
    }

    /// 行データへの内部アクセス
    pub(crate) fn cells(&self) -> &[Vec<String>] {
        &self.rows
    }
}
