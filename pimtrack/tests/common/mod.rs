#![allow(dead_code)]

use embassy_time::Instant;
use heapless::Vec;
use pimtrack::config::{PipelineConfig, SplitRole};
use pimtrack::host::{IndicatorLed, KeyTapper, LayerState, SyncTransport};
use pimtrack::pipeline::PointingPipeline;
use pimtrack::pointing::MotionSample;
use pimtrack::types::indicator::Rgbw;
use pimtrack::types::keycode::HidKeyCode;
use pimtrack::types::mouse_button::MouseButtons;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub const NUM_LAYER: usize = 8;

/// Layer stack and tap recorder of a test keyboard
#[derive(Debug, Default)]
pub struct TestHost {
    pub layers: [bool; NUM_LAYER],
    pub taps: Vec<HidKeyCode, 256>,
}

impl TestHost {
    pub fn with_layer(layer: u8) -> Self {
        let mut host = Self::default();
        host.layer_on(layer);
        host
    }

    pub fn count(&self, key: HidKeyCode) -> usize {
        self.taps.iter().filter(|k| **k == key).count()
    }
}

impl LayerState for TestHost {
    fn layer_on(&mut self, layer: u8) {
        self.layers[layer as usize] = true;
    }

    fn layer_off(&mut self, layer: u8) {
        self.layers[layer as usize] = false;
    }

    fn highest_layer(&self) -> u8 {
        self.layers.iter().rposition(|on| *on).unwrap_or(0) as u8
    }
}

impl KeyTapper for TestHost {
    fn tap(&mut self, key: HidKeyCode) {
        self.taps.push(key).expect("too many taps recorded");
    }
}

/// Records every colour painted on the LED
#[derive(Debug, Default)]
pub struct TestLed(pub Vec<Rgbw, 64>);

impl TestLed {
    pub fn last(&self) -> Option<Rgbw> {
        self.0.last().copied()
    }
}

impl IndicatorLed for TestLed {
    fn set_rgbw(&mut self, color: Rgbw) {
        let _ = self.0.push(color);
    }
}

/// Records every message sent to the other half
#[derive(Debug, Default)]
pub struct TestWire(pub Vec<[u8; 2], 64>);

impl SyncTransport for TestWire {
    fn send(&mut self, message: [u8; 2]) {
        let _ = self.0.push(message);
    }
}

pub type TestPipeline = PointingPipeline<TestLed, TestWire>;

pub fn create_test_pipeline(config: PipelineConfig) -> TestPipeline {
    PointingPipeline::new(config, TestLed::default(), TestWire::default())
}

pub fn central() -> TestPipeline {
    create_test_pipeline(PipelineConfig::default())
}

pub fn peripheral() -> TestPipeline {
    create_test_pipeline(PipelineConfig {
        role: SplitRole::Peripheral,
        ..Default::default()
    })
}

pub fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

pub fn idle() -> MotionSample {
    MotionSample::default()
}

pub fn moving(dx: i16, dy: i16) -> MotionSample {
    MotionSample::new(dx, dy, MouseButtons::NONE)
}

pub fn pressed() -> MotionSample {
    MotionSample::new(0, 0, MouseButtons::BUTTON1)
}

/// Messages sent by the pipeline so far
pub fn sent(pipeline: &TestPipeline) -> &[[u8; 2]] {
    pipeline.color_sync().transport().0.as_slice()
}
