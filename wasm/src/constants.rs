// Shared gameplay constants

// Starting session values
pub const STARTING_GOLD: u32 = 100;
pub const STARTING_FOOD: u32 = 50;
pub const STARTING_SOLDIERS: u32 = 10;
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_TURN: u64 = 1;

// Grid layout
pub const DEFAULT_GRID_DIMENSION: usize = 5;
pub const MAX_GRID_TILES: usize = 1024; // dimension 32

// Leveling
pub const XP_PER_LEVEL: u32 = 100; // Required XP = level * XP_PER_LEVEL
pub const LEVEL_UP_GOLD_BONUS: u32 = 50;
pub const LEVEL_UP_SOLDIER_BONUS: u32 = 5;

// Collect tax: TAX_BASE + level * TAX_PER_LEVEL
pub const TAX_BASE: u32 = 25;
pub const TAX_PER_LEVEL: u32 = 5;

// Train soldiers
pub const TRAIN_GOLD_COST: u32 = 10;
pub const TRAIN_FOOD_COST: u32 = 5;
pub const TRAIN_SOLDIER_GAIN: u32 = 3;

// Diplomacy
pub const DIPLOMACY_GOLD_COST: u32 = 15;
pub const DIPLOMACY_FOOD_MIN: u32 = 10;
pub const DIPLOMACY_FOOD_MAX: u32 = 29; // Inclusive

// Attack
pub const ATTACK_MIN_SOLDIERS: u32 = 5;
pub const ATTACK_FAILURE_CHANCE: f64 = 0.3; // Roll must exceed this to win
pub const ATTACK_LOOT_MIN: u32 = 25;
pub const ATTACK_LOOT_MAX: u32 = 74; // Inclusive
pub const ATTACK_XP_GAIN: u32 = 10;
pub const ATTACK_FAILURE_LOSS: u32 = 2;

// A lost attack can never take soldiers below zero.
const _: () = assert!(ATTACK_MIN_SOLDIERS >= ATTACK_FAILURE_LOSS);

// Persistence
pub const DEFAULT_AUTOSAVE_INTERVAL_MS: f64 = 30_000.0;
pub const DEFAULT_STORAGE_KEY: &str = "empire_rose_save";
pub const DEFAULT_PLAYER_NAME: &str = "Emperor";
