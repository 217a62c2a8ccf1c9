use crate::constants::RANK_BADGES;

/// Renders a 1-based leaderboard position.
///
/// The first three positions carry a medal badge; the rest are plainly numbered.
pub fn rank_label(rank: usize) -> String {
    match rank.checked_sub(1).and_then(|index| RANK_BADGES.get(index)) {
        Some(badge) => format!("{} {}º", badge, rank),
        None => format!("{}º", rank),
    }
}
