// 記述統計モジュール

/// 算術平均を計算する内部実装
///
/// 空の入力では0/0となりNaNを返す。
pub(crate) fn mean_impl(data: &[f64]) -> f64 {
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// 不偏標本分散を計算する内部実装（分母 n-1）
pub(crate) fn sample_variance_impl(data: &[f64]) -> f64 {
    let n = data.len();
    if n == 0 {
        return f64::NAN;
    }

    let mean = mean_impl(data);

    let sum_squared_diff = data.iter().map(|&x| (x - mean).powi(2)).sum::<f64>();

    // n == 1 のとき 0/0 となりNaNを返す
    sum_squared_diff / (n - 1) as f64
}

/// 標本標準偏差を計算する内部実装
pub(crate) fn std_dev_impl(data: &[f64]) -> f64 {
    sample_variance_impl(data).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_basic() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((mean_impl(&data) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_mean_empty_is_nan() {
        let data: Vec<f64> = vec![];
        assert!(mean_impl(&data).is_nan());
    }

    #[test]
    fn test_sample_variance_unbiased() {
        // 分母はn-1（不偏推定量）であること
        let data = vec![2.0, 4.0, 6.0];
        let variance = sample_variance_impl(&data);
        assert!((variance - 4.0).abs() < 1e-10);

        // 母分散（分母n）なら8/3になり、不偏分散とは一致しない
        assert!((variance - 8.0 / 3.0).abs() > 1e-10);
    }

    #[test]
    fn test_std_dev_basic() {
        let data = vec![2.0, 4.0, 6.0];
        assert!((std_dev_impl(&data) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_single_value_is_nan() {
        // 値が1つだけでは標本分散は定義されない
        let data = vec![5.0];
        assert!(sample_variance_impl(&data).is_nan());
        assert!(std_dev_impl(&data).is_nan());
    }

    #[test]
    fn test_empty_is_nan() {
        let data: Vec<f64> = vec![];
        assert!(sample_variance_impl(&data).is_nan());
        assert!(std_dev_impl(&data).is_nan());
    }

    #[test]
    fn test_no_variation_is_zero() {
        let data = vec![3.0, 3.0, 3.0, 3.0];
        assert_eq!(std_dev_impl(&data), 0.0);
    }
}
