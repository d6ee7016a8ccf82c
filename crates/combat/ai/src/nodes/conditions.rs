use behavior_tree::{Behavior, Status};

use crate::context::AiContext;
use crate::strategy::HpBand;

/// Succeeds when the actor's hp ratio lies in `band`.
pub struct InHpBand {
    pub band: HpBand,
}

impl Behavior<AiContext> for InHpBand {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        Status::from_bool(self.band.contains(ctx.hp_ratio()))
    }
}

/// Succeeds when the opponent's hp ratio lies in `band`.
pub struct OpponentInHpBand {
    pub band: HpBand,
}

impl Behavior<AiContext> for OpponentInHpBand {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        Status::from_bool(self.band.contains(ctx.opponent_hp_ratio()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::Character;

    #[test]
    fn bands_read_their_own_side() {
        let mut ctx = AiContext::new(
            &Character::new_monster("Slime").with_hp(4),
            &Character::new_player("Hero"),
            &[],
        );

        let low = HpBand::Below(0.3);
        assert!(InHpBand { band: low }.tick(&mut ctx).is_success());
        assert!(OpponentInHpBand { band: low }.tick(&mut ctx).is_failure());

        let high = HpBand::Above(0.7);
        assert!(InHpBand { band: high }.tick(&mut ctx).is_failure());
        assert!(OpponentInHpBand { band: high }.tick(&mut ctx).is_success());
    }
}
