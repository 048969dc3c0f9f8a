//! Tunable parameters of the pointing pipeline.
//!
//! Every struct implements `Default` with the values the keyboard ships with,
//! override single fields with struct update syntax:
//!
//! ```rust,ignore
//! let config = PipelineConfig {
//!     auto_layer: AutoLayerConfig { timeout: Duration::from_millis(2000), ..Default::default() },
//!     ..Default::default()
//! };
//! ```
use embassy_time::Duration;

use crate::pointing::Hand;

/// Role of this half on the split link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SplitRole {
    /// Connected to the host, owns every decision
    Central,
    /// Only forwards its raw reports and applies what the central sends
    Peripheral,
}

/// Adaptive scaling of trackball motion
#[derive(Debug, Clone, Copy)]
pub struct ScalerConfig {
    /// Initial growth factor, halved/doubled at runtime by the growth keys
    pub growth_factor: f32,
    /// Weight of the newest sample in the smoothed factor, lower is more precise
    pub momentum: f32,
    pub min_scale: f32,
    pub max_scale: f32,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            growth_factor: 8.0,
            momentum: 0.06,
            min_scale: 0.0001,
            max_scale: 64.0,
        }
    }
}

/// Arrow key emulation
#[derive(Debug, Clone, Copy)]
pub struct ArrowConfig {
    /// Decay of the motion average
    pub momentum: f32,
    /// Accumulated motion per arrow tap
    pub step: f32,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            momentum: 0.99,
            step: 6.0,
        }
    }
}

/// Scroll emulation, higher divisors scroll slower
#[derive(Debug, Clone, Copy)]
pub struct ScrollConfig {
    pub divisor_h: f32,
    pub divisor_v: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            divisor_h: 8.0,
            divisor_v: 8.0,
        }
    }
}

/// Trackball button gestures
#[derive(Debug, Clone, Copy)]
pub struct GestureConfig {
    /// Window in which a second press turns a pending gesture into arrow mode
    pub double_press_window: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            double_press_window: Duration::from_millis(400),
        }
    }
}

/// Auto mouse layer
#[derive(Debug, Clone, Copy)]
pub struct AutoLayerConfig {
    /// Layer switched on while the trackballs move
    pub layer: u8,
    /// Idle time after which the layer is switched off again
    pub timeout: Duration,
    /// Extra idle time granted when a mouse key is used on the layer
    pub key_delay: Duration,
    /// Whether the auto mouse layer is on after boot
    pub enabled: bool,
}

impl Default for AutoLayerConfig {
    fn default() -> Self {
        Self {
            layer: 3,
            timeout: Duration::from_millis(1500),
            key_delay: Duration::from_millis(0),
            enabled: false,
        }
    }
}

/// Mouse mode indicator, used while the auto mouse layer is disabled
#[derive(Debug, Clone, Copy)]
pub struct MouseModeConfig {
    /// Idle time after which the layer colour is restored
    pub timeout: Duration,
}

impl Default for MouseModeConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(1500),
        }
    }
}

/// Caps lock handling
#[derive(Debug, Clone, Copy)]
pub struct CapsConfig {
    /// Caps lock is released automatically after this time, `None` keeps it on
    pub auto_release: Option<Duration>,
}

impl Default for CapsConfig {
    fn default() -> Self {
        Self {
            auto_release: Some(Duration::from_secs(30)),
        }
    }
}

/// Configuration of the whole pipeline
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    pub role: SplitRole,
    /// Hand of the central half
    pub central_hand: Hand,
    /// Minimum interval between refreshes of the idle timers
    pub timer_throttle: Duration,
    pub scaler: ScalerConfig,
    pub arrow: ArrowConfig,
    pub scroll: ScrollConfig,
    pub gesture: GestureConfig,
    pub auto_layer: AutoLayerConfig,
    pub mouse_mode: MouseModeConfig,
    pub caps: CapsConfig,
    /// Layers dropped by the toggle keys, the layer-jump layers
    pub jump_layers: [u8; 4],
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            role: SplitRole::Central,
            central_hand: Hand::Left,
            timer_throttle: Duration::from_millis(500),
            scaler: ScalerConfig::default(),
            arrow: ArrowConfig::default(),
            scroll: ScrollConfig::default(),
            gesture: GestureConfig::default(),
            auto_layer: AutoLayerConfig::default(),
            mouse_mode: MouseModeConfig::default(),
            caps: CapsConfig::default(),
            jump_layers: [1, 2, 3, 4],
        }
    }
}
