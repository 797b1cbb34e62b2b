pub mod actuator;
pub mod config;
pub mod events;
pub mod hardware;
pub mod metrics;
pub mod orchestrator;
pub mod scheduler;
pub mod settings;
pub mod symbols;
pub mod testing;

pub use actuator::{create_actuator, Actuator, SimulatedActuator, SpinOutcome, StepperActuator};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, GameConfig,
    HardwareConfig, MediaConfig, ServerConfig,
};
pub use events::{PendingQueue, PlayEvent, TriggerSource};
pub use hardware::{HardwareCapabilities, HardwareError, MotorDriver, TriggerSensor};
pub use orchestrator::{
    EventOrchestrator, OrchestratorError, OrchestratorStatus, TriggerHandle, TriggerPump,
};
pub use scheduler::OutcomeScheduler;
pub use settings::{
    GameSettings, JsonFileSettingsStore, MemorySettingsStore, SettingsError, SettingsStore,
    SettingsUpdate,
};
pub use symbols::{Reels, Symbol, SymbolSequencer};
