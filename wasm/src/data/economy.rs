use crate::constants::{
    LEVEL_UP_GOLD_BONUS, LEVEL_UP_SOLDIER_BONUS, STARTING_FOOD, STARTING_GOLD, STARTING_LEVEL,
    STARTING_SOLDIERS, STARTING_TURN, XP_PER_LEVEL,
};
use crate::types::{GameError, PassiveYield, Resource};

/// Level reached by a level-up, reported to the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
}

/// Resource pool plus progression counters.
///
/// Resources are unsigned; every debit is checked before it lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Economy {
    pub(crate) gold: u32,
    pub(crate) food: u32,
    pub(crate) soldiers: u32,
    pub(crate) level: u32,
    pub(crate) experience: u32,
    pub(crate) turn: u64,
}

impl Default for Economy {
    fn default() -> Self {
        Self {
            gold: STARTING_GOLD,
            food: STARTING_FOOD,
            soldiers: STARTING_SOLDIERS,
            level: STARTING_LEVEL,
            experience: 0,
            turn: STARTING_TURN,
        }
    }
}

impl Economy {
    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn food(&self) -> u32 {
        self.food
    }

    pub fn soldiers(&self) -> u32 {
        self.soldiers
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn get(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Gold => self.gold,
            Resource::Food => self.food,
            Resource::Soldiers => self.soldiers,
        }
    }

    fn slot_mut(&mut self, resource: Resource) -> &mut u32 {
        match resource {
            Resource::Gold => &mut self.gold,
            Resource::Food => &mut self.food,
            Resource::Soldiers => &mut self.soldiers,
        }
    }

    pub fn credit(&mut self, resource: Resource, amount: u32) {
        let slot = self.slot_mut(resource);
        *slot = slot.saturating_add(amount);
    }

    pub fn debit(&mut self, resource: Resource, amount: u32) -> Result<(), GameError> {
        let slot = self.slot_mut(resource);
        *slot = slot
            .checked_sub(amount)
            .ok_or_else(|| shortage(resource))?;
        Ok(())
    }

    pub fn can_afford(&self, resource: Resource, amount: u32) -> bool {
        self.get(resource) >= amount
    }

    /// Experience needed to leave the current level.
    pub fn required_xp(&self) -> u32 {
        self.level.saturating_mul(XP_PER_LEVEL)
    }

    pub fn add_experience(&mut self, amount: u32) -> Option<LevelUp> {
        self.grant_experience(amount);
        self.check_level_up()
    }

    /// Banks experience without the leveling check, for actions whose turn
    /// advance runs the check.
    pub fn grant_experience(&mut self, amount: u32) {
        self.experience = self.experience.saturating_add(amount);
    }

    /// Promotes at most one level per call. Surplus experience carries over
    /// but is not re-checked until the next call.
    pub fn check_level_up(&mut self) -> Option<LevelUp> {
        let required = self.required_xp();
        if self.experience < required {
            return None;
        }

        self.experience -= required;
        self.level = self.level.saturating_add(1);
        self.credit(Resource::Gold, LEVEL_UP_GOLD_BONUS);
        self.credit(Resource::Soldiers, LEVEL_UP_SOLDIER_BONUS);
        Some(LevelUp { level: self.level })
    }

    /// Applies one tile's per-turn yield. Returns whether anything changed.
    pub fn apply_yield(&mut self, passive_yield: PassiveYield) -> bool {
        match passive_yield {
            PassiveYield::None => false,
            PassiveYield::Produce { resource, amount } => {
                self.credit(resource, amount);
                true
            }
            PassiveYield::Convert {
                input,
                input_amount,
                output,
                output_amount,
            } => {
                if self.debit(input, input_amount).is_err() {
                    return false;
                }
                self.credit(output, output_amount);
                true
            }
        }
    }

    pub fn increment_turn(&mut self) {
        self.turn = self.turn.saturating_add(1);
    }
}

fn shortage(resource: Resource) -> GameError {
    match resource {
        Resource::Gold => GameError::InsufficientFunds,
        Resource::Food => GameError::InsufficientResources,
        Resource::Soldiers => GameError::InsufficientSoldiers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_fixed_values() {
        let economy = Economy::default();
        assert_eq!(economy.gold(), 100);
        assert_eq!(economy.food(), 50);
        assert_eq!(economy.soldiers(), 10);
        assert_eq!(economy.level(), 1);
        assert_eq!(economy.experience(), 0);
        assert_eq!(economy.turn(), 1);
    }

    #[test]
    fn debit_fails_without_mutation() {
        let mut economy = Economy::default();
        let before = economy.clone();
        assert_eq!(
            economy.debit(Resource::Gold, 101),
            Err(GameError::InsufficientFunds)
        );
        assert_eq!(economy, before);

        economy.debit(Resource::Gold, 100).unwrap();
        assert_eq!(economy.gold(), 0);
    }

    #[test]
    fn debit_error_names_the_short_resource() {
        let mut economy = Economy::default();
        assert_eq!(
            economy.debit(Resource::Food, 51),
            Err(GameError::InsufficientResources)
        );
        assert_eq!(
            economy.debit(Resource::Soldiers, 11),
            Err(GameError::InsufficientSoldiers)
        );
        assert_eq!(economy, Economy::default());
    }

    #[test]
    fn granted_experience_waits_for_check() {
        let mut economy = Economy {
            experience: 95,
            ..Economy::default()
        };
        economy.grant_experience(10);
        assert_eq!(economy.level(), 1);
        assert_eq!(economy.experience(), 105);
        assert_eq!(economy.check_level_up(), Some(LevelUp { level: 2 }));
        assert_eq!(economy.experience(), 5);
    }

    #[test]
    fn level_up_keeps_carryover_without_cascading() {
        let mut economy = Economy {
            experience: 95,
            ..Economy::default()
        };
        let level_up = economy.add_experience(10);
        assert_eq!(level_up, Some(LevelUp { level: 2 }));
        assert_eq!(economy.level(), 2);
        assert_eq!(economy.experience(), 5);
        assert_eq!(economy.gold(), 150);
        assert_eq!(economy.soldiers(), 15);
    }

    #[test]
    fn large_gain_promotes_only_once_per_call() {
        let mut economy = Economy::default();
        economy.add_experience(450);
        assert_eq!(economy.level(), 2);
        assert_eq!(economy.experience(), 350);

        // Next check picks up the retained surplus.
        economy.check_level_up();
        assert_eq!(economy.level(), 3);
        assert_eq!(economy.experience(), 150);
    }

    #[test]
    fn check_without_enough_xp_is_noop() {
        let mut economy = Economy {
            experience: 99,
            ..Economy::default()
        };
        let before = economy.clone();
        assert_eq!(economy.check_level_up(), None);
        assert_eq!(economy, before);
    }

    #[test]
    fn convert_yield_needs_full_input() {
        let barracks = PassiveYield::Convert {
            input: Resource::Food,
            input_amount: 2,
            output: Resource::Soldiers,
            output_amount: 1,
        };
        let mut economy = Economy {
            food: 1,
            ..Economy::default()
        };
        assert!(!economy.apply_yield(barracks));
        assert_eq!(economy.food(), 1);
        assert_eq!(economy.soldiers(), 10);

        economy.food = 2;
        assert!(economy.apply_yield(barracks));
        assert_eq!(economy.food(), 0);
        assert_eq!(economy.soldiers(), 11);
    }
}
