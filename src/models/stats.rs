//! User-visible statistics for a finished transfer.

/// Figures shown in a panel after a successful exchange.
///
/// Every field is optional: decompression endpoints report nothing, and
/// the ratio only makes sense when compressing.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TransferStats {
    pub original_size: Option<u64>,
    pub compressed_size: Option<u64>,
    /// Space saved by compression, as a percentage of the original size.
    pub ratio: Option<f64>,
}

impl TransferStats {
    /// True when the exchange reported no figures at all.
    pub fn is_empty(&self) -> bool {
        self.original_size.is_none() && self.compressed_size.is_none() && self.ratio.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(TransferStats::default().is_empty());
        assert!(
            !TransferStats {
                original_size: Some(1),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
