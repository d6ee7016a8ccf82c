use alloc::vec::Vec;

use crate::model::AbilityKind;

use super::AbilitySlot;

/// Ordered sequence of equipped ability slots.
///
/// Order is significant: when several usable slots share a kind, the one
/// earlier in the set wins. Duplicate kinds are allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilitySet {
    slots: Vec<AbilitySlot>,
}

impl AbilitySet {
    pub fn new(slots: Vec<AbilitySlot>) -> Self {
        Self { slots }
    }

    /// Basic Attack, Powerful Attack, Heal, Quick Strike.
    pub fn player_default() -> Self {
        Self::new(alloc::vec![
            AbilitySlot::basic_attack(),
            AbilitySlot::powerful_attack(),
            AbilitySlot::heal(),
            AbilitySlot::quick_strike(),
        ])
    }

    /// Basic Attack, Powerful Attack, Heal.
    pub fn monster_default() -> Self {
        Self::new(alloc::vec![
            AbilitySlot::basic_attack(),
            AbilitySlot::powerful_attack(),
            AbilitySlot::heal(),
        ])
    }

    #[inline]
    pub fn slots(&self) -> &[AbilitySlot] {
        &self.slots
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AbilitySlot> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, AbilitySlot> {
        self.slots.iter()
    }

    /// Usable slots with their positions, in set order.
    pub fn usable(&self) -> impl Iterator<Item = (usize, &AbilitySlot)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_usable())
    }

    /// First usable slot of `kind`.
    pub fn first_usable(&self, kind: AbilityKind) -> Option<(usize, &AbilitySlot)> {
        self.usable().find(|(_, slot)| slot.kind == kind)
    }

    /// Position of the first slot whose ability has this name.
    pub fn position_of(&self, ability_name: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.ability.name == ability_name)
    }

    /// Advances every slot by one turn.
    #[must_use]
    pub fn advance_turn(self) -> Self {
        Self {
            slots: self
                .slots
                .into_iter()
                .map(AbilitySlot::advance_turn)
                .collect(),
        }
    }

    /// Activates the slot at `index`. An out-of-range index changes nothing.
    #[must_use]
    pub fn activate(mut self, index: usize) -> Self {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = slot.clone().activate();
        }
        self
    }
}

impl From<Vec<AbilitySlot>> for AbilitySet {
    fn from(slots: Vec<AbilitySlot>) -> Self {
        Self::new(slots)
    }
}

impl<'a> IntoIterator for &'a AbilitySet {
    type Item = &'a AbilitySlot;
    type IntoIter = core::slice::Iter<'a, AbilitySlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_layout() {
        let player = AbilitySet::player_default();
        assert_eq!(player.len(), 4);
        assert_eq!(player.get(3).map(|s| s.ability.name.as_str()), Some("Quick Strike"));

        let monster = AbilitySet::monster_default();
        let kinds: Vec<_> = monster.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            [
                AbilityKind::BasicAttack,
                AbilityKind::PowerfulAttack,
                AbilityKind::Heal
            ]
        );
    }

    #[test]
    fn activate_then_advance_only_touches_chosen_slot() {
        let set = AbilitySet::monster_default().activate(1);
        assert!(!set.slots()[1].is_usable());
        assert!(set.slots()[2].is_usable());

        let set = set.advance_turn();
        assert_eq!(set.slots()[1].cooldown_current(), 2);
        assert_eq!(set.slots()[2].cooldown_current(), 0);
    }

    #[test]
    fn activate_out_of_range_is_noop() {
        let set = AbilitySet::monster_default();
        assert_eq!(set.clone().activate(42), set);
    }

    #[test]
    fn first_usable_respects_order_and_cooldown() {
        let set = AbilitySet::player_default();
        // Basic Attack and Quick Strike share a kind; the earlier one wins.
        assert_eq!(set.first_usable(AbilityKind::BasicAttack).map(|(i, _)| i), Some(0));

        let set = set.activate(2);
        assert!(set.first_usable(AbilityKind::Heal).is_none());
    }

    #[test]
    fn position_of_finds_by_name() {
        let set = AbilitySet::monster_default();
        assert_eq!(set.position_of("Heal"), Some(2));
        assert_eq!(set.position_of("Fireball"), None);
    }

    #[test]
    fn empty_set_has_no_usable_slots() {
        let set = AbilitySet::default();
        assert!(set.is_empty());
        assert_eq!(set.usable().count(), 0);
    }
}
