use behavior_tree::{Behavior, Status};
use combat_core::AbilityKind;

use crate::context::{AiContext, Pick};

/// Picks the first usable slot of `kind`. Fails if there is none.
pub struct UseFirst {
    pub kind: AbilityKind,
}

impl Behavior<AiContext> for UseFirst {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        match ctx.first_usable(self.kind) {
            Some(index) => {
                ctx.set_pick(Pick::Slot(index));
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Picks the canonical Basic Attack. Never fails.
pub struct UseDefault;

impl Behavior<AiContext> for UseDefault {
    fn tick(&self, ctx: &mut AiContext) -> Status {
        ctx.set_pick(Pick::Default);
        Status::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{AbilitySet, Character};

    fn ctx_for(set: &AbilitySet) -> AiContext {
        AiContext::new(
            &Character::new_monster("Slime"),
            &Character::new_player("Hero"),
            set.slots(),
        )
    }

    #[test]
    fn use_first_writes_slot_position() {
        let set = AbilitySet::monster_default();
        let mut ctx = ctx_for(&set);

        let node = UseFirst {
            kind: AbilityKind::PowerfulAttack,
        };
        assert_eq!(node.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.pick(), Some(Pick::Slot(1)));
    }

    #[test]
    fn use_first_fails_on_cooldown() {
        let set = AbilitySet::monster_default().activate(2);
        let mut ctx = ctx_for(&set);

        let node = UseFirst {
            kind: AbilityKind::Heal,
        };
        assert_eq!(node.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.pick(), None);
    }

    #[test]
    fn use_default_always_succeeds() {
        let mut ctx = ctx_for(&AbilitySet::default());
        assert_eq!(UseDefault.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.pick(), Some(Pick::Default));
    }
}
