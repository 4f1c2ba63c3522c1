use tracing::debug;

use crate::constants::{
    ATTACK_FAILURE_CHANCE, ATTACK_FAILURE_LOSS, ATTACK_LOOT_MAX, ATTACK_LOOT_MIN,
    ATTACK_MIN_SOLDIERS, ATTACK_XP_GAIN, DIPLOMACY_FOOD_MAX, DIPLOMACY_FOOD_MIN,
    DIPLOMACY_GOLD_COST, TAX_BASE, TAX_PER_LEVEL, TRAIN_FOOD_COST, TRAIN_GOLD_COST,
    TRAIN_SOLDIER_GAIN,
};
use crate::data::{Catalog, SessionData};
use crate::dependency::RandomSource;
use crate::types::{ActionRequest, ActionResult, GameError, Resource};

use super::turn_engine::TurnEngine;

/// Result of the action itself, before any turn advance.
struct Applied {
    log: Vec<String>,
    advances_turn: bool,
}

impl Applied {
    fn turn(log: Vec<String>) -> Self {
        Self {
            log,
            advances_turn: true,
        }
    }
}

pub struct ActionProcessor {
    turn_engine: TurnEngine,
}

impl ActionProcessor {
    pub fn new() -> Self {
        Self {
            turn_engine: TurnEngine::new(),
        }
    }

    /// Validates and applies one action. A failed action leaves the session
    /// untouched.
    pub fn submit(
        &self,
        data: &mut SessionData,
        rng: &mut dyn RandomSource,
        request: &ActionRequest,
    ) -> ActionResult {
        let applied = match request {
            ActionRequest::Build { tile, kind } => self.build(data, *tile, kind.as_deref()),
            ActionRequest::CollectTax => Ok(self.collect_tax(data)),
            ActionRequest::TrainSoldiers => self.train_soldiers(data),
            ActionRequest::Diplomacy => self.diplomacy(data, rng),
            ActionRequest::Attack => self.attack(data, rng),
        };

        match applied {
            Ok(Applied {
                mut log,
                advances_turn,
            }) => {
                debug!(action = request.name(), "action applied");
                if advances_turn {
                    let report = self.turn_engine.advance_turn(data);
                    log.extend(report.log_lines());
                }
                ActionResult {
                    turn_advanced: advances_turn,
                    ..ActionResult::success(log)
                }
            }
            Err(err) => {
                debug!(action = request.name(), code = err.code(), "action rejected");
                ActionResult::failure(&err)
            }
        }
    }

    // Placing a building costs gold but not a turn.
    fn build(
        &self,
        data: &mut SessionData,
        tile: Option<usize>,
        kind: Option<&str>,
    ) -> Result<Applied, GameError> {
        let (Some(tile), Some(kind)) = (tile, kind) else {
            return Err(GameError::NoSelection);
        };
        let spec = Catalog::lookup(kind)?;

        if !data.grid().is_buildable(tile)? {
            return Err(GameError::NotBuildable(tile));
        }
        let cost = spec.cost.ok_or(GameError::NotBuildable(tile))?;
        if !data.economy().can_afford(Resource::Gold, cost) {
            return Err(GameError::InsufficientFunds);
        }

        data.economy_mut().debit(Resource::Gold, cost)?;
        if let Err(err) = data.grid_mut().place_building(tile, spec.kind) {
            data.economy_mut().credit(Resource::Gold, cost);
            return Err(err);
        }

        Ok(Applied {
            log: vec![format!("{} built! (-{} gold)", spec.name, cost)],
            advances_turn: false,
        })
    }

    fn collect_tax(&self, data: &mut SessionData) -> Applied {
        let economy = data.economy_mut();
        let tax = TAX_BASE.saturating_add(economy.level().saturating_mul(TAX_PER_LEVEL));
        economy.credit(Resource::Gold, tax);
        Applied::turn(vec![format!("Collected {tax} gold in taxes.")])
    }

    fn train_soldiers(&self, data: &mut SessionData) -> Result<Applied, GameError> {
        let economy = data.economy_mut();
        if !economy.can_afford(Resource::Gold, TRAIN_GOLD_COST)
            || !economy.can_afford(Resource::Food, TRAIN_FOOD_COST)
        {
            return Err(GameError::InsufficientResources);
        }

        economy.debit(Resource::Gold, TRAIN_GOLD_COST)?;
        economy.debit(Resource::Food, TRAIN_FOOD_COST)?;
        economy.credit(Resource::Soldiers, TRAIN_SOLDIER_GAIN);
        Ok(Applied::turn(vec![format!(
            "{TRAIN_SOLDIER_GAIN} new soldiers trained."
        )]))
    }

    fn diplomacy(
        &self,
        data: &mut SessionData,
        rng: &mut dyn RandomSource,
    ) -> Result<Applied, GameError> {
        let economy = data.economy_mut();
        if !economy.can_afford(Resource::Gold, DIPLOMACY_GOLD_COST) {
            return Err(GameError::InsufficientFunds);
        }

        let food = rng.next_int_in_range(DIPLOMACY_FOOD_MIN, DIPLOMACY_FOOD_MAX);
        economy.debit(Resource::Gold, DIPLOMACY_GOLD_COST)?;
        economy.credit(Resource::Food, food);
        Ok(Applied::turn(vec![format!(
            "Negotiations succeeded! Received {food} food from allies."
        )]))
    }

    fn attack(
        &self,
        data: &mut SessionData,
        rng: &mut dyn RandomSource,
    ) -> Result<Applied, GameError> {
        let economy = data.economy_mut();
        if !economy.can_afford(Resource::Soldiers, ATTACK_MIN_SOLDIERS) {
            return Err(GameError::InsufficientSoldiers);
        }

        let mut log = Vec::with_capacity(2);
        if rng.next_float() > ATTACK_FAILURE_CHANCE {
            let loot = rng.next_int_in_range(ATTACK_LOOT_MIN, ATTACK_LOOT_MAX);
            economy.credit(Resource::Gold, loot);
            log.push(format!("Attack succeeded! Looted {loot} gold."));
            // The turn advance that follows runs the single leveling check.
            economy.grant_experience(ATTACK_XP_GAIN);
        } else {
            economy.debit(Resource::Soldiers, ATTACK_FAILURE_LOSS)?;
            log.push(format!(
                "Attack failed! Lost {ATTACK_FAILURE_LOSS} soldiers."
            ));
        }
        Ok(Applied::turn(log))
    }
}

impl Default for ActionProcessor {
    fn default() -> Self {
        Self::new()
    }
}
