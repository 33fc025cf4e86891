// Web front-end constants: element ids, dataset keys and logging cadence.

/// Canvas mounted automatically by `start()` when present in the page.
pub const AUTO_MOUNT_CANVAS_ID: &str = "watercolor-canvas";

// Tuning overrides read from `data-*` attributes on the canvas.
// Keys are the camelCase names `HTMLElement.dataset` exposes.
pub const DATA_CAP: &str = "particleCap"; // data-particle-cap
pub const DATA_MIN_DISTANCE: &str = "spawnMinDistance"; // data-spawn-min-distance
pub const DATA_STEP: &str = "spawnStep"; // data-spawn-step
pub const DATA_MAX_PER_EVENT: &str = "spawnMaxPerEvent"; // data-spawn-max-per-event
pub const DATA_JITTER: &str = "spawnJitter"; // data-spawn-jitter
pub const DATA_LAYERS: &str = "renderLayers"; // data-render-layers
pub const DATA_SEED: &str = "seed"; // data-seed, fixes the RNG for reproducible demos

pub const OVERRIDE_KEYS: [&str; 6] = [
    DATA_CAP,
    DATA_MIN_DISTANCE,
    DATA_STEP,
    DATA_MAX_PER_EVENT,
    DATA_JITTER,
    DATA_LAYERS,
];

// Frame stats are logged at debug level once per this many rendered frames
pub const STATS_LOG_INTERVAL_FRAMES: u32 = 600;

// Backing store never collapses below one pixel per side
pub const MIN_BACKING_PX: u32 = 1;
