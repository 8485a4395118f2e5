/// Battle configuration constants.
///
/// Combat rules are fixed; the only tunables are capacities used as type
/// parameters for bounded collections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BattleConfig;

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of distinct cards in a battle pack.
    pub const PACK_SIZE: usize = 6;
}
