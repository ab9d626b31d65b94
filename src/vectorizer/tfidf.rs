/// TF-IDF weighting used by the rankers
pub trait TFIDFEngine {
    /// IDFを計算するメソッド
    /// # Arguments
    /// * `doc_num` - コレクション内のバッグ数
    /// * `doc_freq` - トークンを含むバッグ数 (1以上, doc_num以下)
    fn idf(doc_num: u64, doc_freq: u64) -> f64;

    /// TFを計算するメソッド
    /// # Arguments
    /// * `count` - バッグ内のトークン出現回数
    /// * `term_sum` - バッグ内の総トークン数
    fn tf(count: u64, term_sum: u64) -> f64;
}

/// デフォルトのTF-IDFエンジン
/// TF is the raw occurrence count, IDF is `ln(D / df)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine for DefaultTFIDFEngine {
    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        (doc_num as f64 / doc_freq as f64).ln()
    }

    #[inline]
    fn tf(count: u64, _term_sum: u64) -> f64 {
        count as f64
    }
}
