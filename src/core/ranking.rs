//! Version ranking.
//!
//! Scores how well a candidate's release fingerprint matches the user's
//! version, on a 0-100 scale.

use crate::models::version::Version;
use std::collections::HashSet;

/// Rank `candidate` against `input`.
///
/// `input_ratio` (0-100) is the weight of input identifiers missing from the
/// candidate; the remaining `100 - input_ratio` weighs candidate identifiers
/// the input did not ask for. Differing disc counts, or an empty identifier
/// set on either side, rank 0.
pub fn rank_version(input: &Version, candidate: &Version, input_ratio: u8) -> f64 {
    let both_unknown = input.has_unknown_num_of_cds() && candidate.has_unknown_num_of_cds();
    if !both_unknown && input.num_of_cds() != candidate.num_of_cds() {
        tracing::debug!(
            "Disc count mismatch: {} vs {}",
            input.num_of_cds(),
            candidate.num_of_cds()
        );
        return 0.0;
    }

    let input_ids: HashSet<&str> = input.identifiers().iter().map(String::as_str).collect();
    let candidate_ids: HashSet<&str> = candidate.identifiers().iter().map(String::as_str).collect();
    if input_ids.is_empty() || candidate_ids.is_empty() {
        return 0.0;
    }

    let iic = input_ids.len() as f64;
    let pic = candidate_ids.len() as f64;
    let ioc = input_ids.difference(&candidate_ids).count() as f64;
    let poc = candidate_ids.difference(&input_ids).count() as f64;

    let ir = f64::from(input_ratio);
    let pr = 100.0 - ir;

    100.0 - (ir * (ioc / iic) + pr * (poc / pic))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::title::Title;

    fn version(ids: &[&str], cds: i32) -> Version {
        let title = Title::movie("The Matrix", Some(1999), None).unwrap();
        Version::new(ids.iter().map(|s| s.to_string()).collect(), title, cds).unwrap()
    }

    #[test]
    fn test_identical_identifiers() {
        let input = version(&["720p", "dts", "x264"], 2);
        let candidate = version(&["x264", "720p", "dts"], 2);
        for ratio in [0, 30, 60, 100] {
            assert_eq!(rank_version(&input, &candidate, ratio), 100.0);
        }
    }

    #[test]
    fn test_disjoint_identifiers() {
        let input = version(&["720p", "dts"], 0);
        let candidate = version(&["1080p", "ac3"], 0);
        assert_eq!(rank_version(&input, &candidate, 60), 0.0);
    }

    #[test]
    fn test_disc_count_mismatch() {
        let input = version(&["720p", "dts"], 1);
        let candidate = version(&["720p", "dts"], 2);
        assert_eq!(rank_version(&input, &candidate, 60), 0.0);

        // Unknown on one side only still counts as different.
        let input = version(&["720p", "dts"], 0);
        assert_eq!(rank_version(&input, &candidate, 60), 0.0);
    }

    #[test]
    fn test_empty_side() {
        let input = version(&[], 0);
        let candidate = version(&["720p"], 0);
        assert_eq!(rank_version(&input, &candidate, 60), 0.0);
        assert_eq!(rank_version(&candidate, &input, 60), 0.0);
    }

    #[test]
    fn test_weighted_partial_match() {
        let input = version(&["720p", "ac3", "bluray", "chd"], 0);
        let candidate = version(&["720p", "ac3", "wtf"], 0);
        let rank = rank_version(&input, &candidate, 60);
        assert!((rank - 56.666_666).abs() < 0.001, "rank was {}", rank);
    }

    #[test]
    fn test_duplicates_count_once() {
        let input = version(&["720p", "720p", "dts"], 0);
        let candidate = version(&["720p", "dts"], 0);
        assert_eq!(rank_version(&input, &candidate, 50), 100.0);
    }
}
