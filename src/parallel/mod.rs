//! 並列処理機能を提供するモジュール

use log::debug;
use rayon::prelude::*;

use crate::error::Result;
use crate::matrix::TextMatrix;
use crate::stats;

/// 並列処理の拡張: TextMatrixの並列処理
impl TextMatrix {
    /// 標準偏差列の追加を行単位で並列実行
    ///
    /// 行は互いに独立なので、行単位で並列化できる。出力は
    /// [`TextMatrix::append_row_std`]とセル単位で一致し、
    /// 行の順序も保存される。
    pub fn par_append_row_std(&self, sample_columns: &[usize]) -> Result<TextMatrix> {
        stats::validate_sample_columns(self, sample_columns)?;

        debug!(
            "appending row std column in parallel: {} rows, {} sample columns",
            self.row_count(),
            sample_columns.len()
        );

        let rows: Vec<Vec<String>> = self
            .cells()
            .par_iter()
            .map(|row| {
                let mut out = row.clone();
                out.push(stats::row_std(row, sample_columns).to_string());
                out
            })
            .collect();

        Ok(TextMatrix::from_parts(rows, self.column_count() + 1))
    }
}
