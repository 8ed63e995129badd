use thiserror::Error;

/// エラー型の定義
#[derive(Error, Debug)]
pub enum Error {
    #[error("サンプル列インデックスが範囲外です: インデックス {index}, 列数 {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("行の長さが一致しません: 行 {row}, 期待値 {expected}, 実際 {found}")]
    InconsistentRowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("データがありません: {0}")]
    EmptyData(String),

    #[error("無効な入力です: {0}")]
    InvalidInput(String),
}

// ExprStatErrorという名前でも参照できるようにする
pub type ExprStatError = Error;

/// Resultの型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
