// ExprStat 統計モジュール
//
// このモジュールは、テキスト行列の行方向の記述統計機能を提供します。
// 数値カーネル（平均、不偏標本分散、標本標準偏差）と、
// 標準偏差列を追加する行単位の変換が実装されています。

pub mod descriptive;

use log::debug;

use crate::error::{ExprStatError, Result};
use crate::matrix::{lenient_f64, TextMatrix};

/// 算術平均を計算
///
/// # 説明
/// 値の合計を件数で割った平均を計算します。空の入力では0/0により
/// NaNになります。NaNはエラーではなくデータとして扱われます。
///
/// # 例
/// ```rust
/// use exprstat::stats;
///
/// let data = vec![2.0, 4.0, 6.0];
/// assert_eq!(stats::mean(&data), 4.0);
/// ```
pub fn mean<T: AsRef<[f64]>>(data: T) -> f64 {
    descriptive::mean_impl(data.as_ref())
}

/// 不偏標本分散を計算
///
/// # 説明
/// 分母にn-1を用いる不偏推定量です。値が1つだけの場合は0/0により
/// NaN、空の入力でもNaNになります。
///
/// # 例
/// ```rust
/// use exprstat::stats;
///
/// let data = vec![2.0, 4.0, 6.0];
/// assert_eq!(stats::sample_variance(&data), 4.0);
/// ```
pub fn sample_variance<T: AsRef<[f64]>>(data: T) -> f64 {
    descriptive::sample_variance_impl(data.as_ref())
}

/// 標本標準偏差を計算
///
/// # 説明
/// 不偏標本分散の平方根です。分散がNaNの場合はNaNが伝播します。
///
/// # 例
/// ```rust
/// use exprstat::stats;
///
/// let data = vec![2.0, 4.0, 6.0];
/// assert_eq!(stats::std_dev(&data), 2.0);
/// ```
pub fn std_dev<T: AsRef<[f64]>>(data: T) -> f64 {
    descriptive::std_dev_impl(data.as_ref())
}

/// サンプル列インデックスを検証する
///
/// 範囲外のインデックスがあれば、行処理を始める前にエラーを返す。
pub(crate) fn validate_sample_columns(
    matrix: &TextMatrix,
    sample_columns: &[usize],
) -> Result<()> {
    for &index in sample_columns {
        if index >= matrix.column_count() {
            return Err(ExprStatError::IndexOutOfBounds {
                index,
                size: matrix.column_count(),
            });
        }
    }
    Ok(())
}

/// 1行分のサンプル値を抽出して標本標準偏差を計算する
pub(crate) fn row_std(row: &[String], sample_columns: &[usize]) -> f64 {
    let values: Vec<f64> = sample_columns
        .iter()
        .map(|&col| lenient_f64(&row[col]))
        .collect();

    descriptive::std_dev_impl(&values)
}

// TextMatrixに対する行統計の拡張
impl TextMatrix {
    /// 各行のサンプル列から標本標準偏差を計算し、末尾列として追加
    ///
    /// # 説明
    /// 各行について、`sample_columns`が指すセルを寛容な数値変換
    /// （[`lenient_f64`]）でf64に変換し、不偏標本標準偏差を計算します。
    /// 出力は元のセルをすべて保持したまま1列広い新しい行列で、
    /// 入力は変更されません。
    ///
    /// サンプル列が2つ未満の行の統計量はNaNになり、`"NaN"`として
    /// 描画されます。範囲外のインデックスはエラーです。
    ///
    /// # 例
    /// ```rust
    /// use exprstat::TextMatrix;
    ///
    /// let matrix = TextMatrix::from_rows(vec![vec![
    ///     "g1".to_string(),
    ///     "2".to_string(),
    ///     "4".to_string(),
    ///     "6".to_string(),
    /// ]])
    /// .unwrap();
    ///
    /// let augmented = matrix.append_row_std(&[1, 2, 3]).unwrap();
    /// assert_eq!(augmented.column_count(), 5);
    /// assert_eq!(augmented.get(0, 4), Some("2"));
    /// ```
    pub fn append_row_std(&self, sample_columns: &[usize]) -> Result<TextMatrix> {
        validate_sample_columns(self, sample_columns)?;

        debug!(
            "appending row std column: {} rows, {} sample columns",
            self.row_count(),
            sample_columns.len()
        );

        let rows: Vec<Vec<String>> = self
            .rows()
            .map(|row| {
                let mut out = row.to_vec();
                out.push(row_std(row, sample_columns).to_string());
                out
            })
            .collect();

        Ok(TextMatrix::from_parts(rows, self.column_count() + 1))
    }

    /// 標準偏差が定義されないか0である行のインデックスを返す
    ///
    /// # 説明
    /// サンプル列の値に変動がない行（標準偏差が0）と、サンプル数の
    /// 不足で標準偏差が定義されない行（NaN）の位置を昇順で返します。
    /// 発現に変動のない遺伝子行の検出に使用します。
    pub fn rows_without_deviation(&self, sample_columns: &[usize]) -> Result<Vec<usize>> {
        validate_sample_columns(self, sample_columns)?;

        let mut flat_rows = Vec::new();
        for (i, row) in self.rows().enumerate() {
            let stdev = row_std(row, sample_columns);
            if stdev == 0.0 || stdev.is_nan() {
                flat_rows.push(i);
            }
        }

        Ok(flat_rows)
    }
}
