//! Host plugin lifecycle
//!
//! The host drives the plugin through a fixed set of hooks. `PiSugar3`
//! wires the orchestrator to one labeled UI element and to host power-off.

use embedded_hal::delay::DelayNs;
use log::{info, warn};
use pisugar_hal::I2cBus;

use crate::config::PluginConfig;
use crate::orchestrator::{RenderCommand, TelemetryOrchestrator};
use crate::safety::ShutdownGuard;
use crate::sampler::TelemetrySampler;
use crate::traits::{HostPower, LabeledValueSpec, LabeledValueUi};

/// Key of the battery element
pub const ELEMENT_KEY: &str = "bat";

/// Status shown right before powering off
pub const EXHAUSTED_STATUS: &str = "Battery exhausted, bye ...";

/// Lifecycle hooks a host calls on a plugin
pub trait Plugin {
    /// Plugin was loaded and configured
    fn on_loaded(&mut self) {}

    /// UI is ready for elements to be registered
    fn on_ui_setup<U: LabeledValueUi>(&mut self, ui: &mut U);

    /// One UI refresh cycle
    fn on_ui_update<U: LabeledValueUi>(&mut self, ui: &mut U, now_ms: u64);

    /// Plugin is being unloaded
    fn on_unload<U: LabeledValueUi>(&mut self, ui: &mut U);
}

/// Battery indicator plugin for the PiSugar 3
pub struct PiSugar3<B, D, P> {
    orchestrator: TelemetryOrchestrator<B, D>,
    power: P,
    /// Set once the UI element exists; updates are skipped until then
    ready: bool,
}

impl<B, D, P> PiSugar3<B, D, P>
where
    B: I2cBus,
    D: DelayNs,
    P: HostPower,
{
    /// Build the plugin around an opened bus
    pub fn new(bus: B, delay: D, power: P, config: &PluginConfig) -> Self {
        let sampler = TelemetrySampler::new(bus, delay);
        let guard = ShutdownGuard::new(config.shutdown);
        Self::with_orchestrator(TelemetryOrchestrator::new(sampler, guard), power)
    }

    pub fn with_orchestrator(orchestrator: TelemetryOrchestrator<B, D>, power: P) -> Self {
        Self {
            orchestrator,
            power,
            ready: false,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn power(&self) -> &P {
        &self.power
    }

    fn render<U: LabeledValueUi>(&mut self, ui: &mut U, cmd: &RenderCommand) {
        ui.set_label(ELEMENT_KEY, cmd.label.as_str());
        ui.set_value(ELEMENT_KEY, cmd.value.as_str());

        if cmd.shutdown {
            info!(
                "[pisugar3] Empty battery (<= {}%): shutting down",
                self.orchestrator.guard().threshold().unwrap_or_default()
            );
            ui.force_update(EXHAUSTED_STATUS);
            self.power.shutdown();
        }
    }
}

impl<B, D, P> Plugin for PiSugar3<B, D, P>
where
    B: I2cBus,
    D: DelayNs,
    P: HostPower,
{
    fn on_loaded(&mut self) {
        info!("[pisugar3] plugin loaded.");
    }

    fn on_ui_setup<U: LabeledValueUi>(&mut self, ui: &mut U) {
        let spec = LabeledValueSpec {
            key: ELEMENT_KEY,
            label: "BAT",
            value: "0%",
            position: (ui.width() / 2 + 10, 0),
        };

        match ui.add_labeled_value(&spec) {
            Ok(()) => self.ready = true,
            Err(e) => warn!("pisugar3 setup err: {:?}", e),
        }
    }

    fn on_ui_update<U: LabeledValueUi>(&mut self, ui: &mut U, now_ms: u64) {
        if !self.ready {
            return;
        }

        let cmd = self.orchestrator.tick(now_ms);
        self.render(ui, &cmd);
    }

    fn on_unload<U: LabeledValueUi>(&mut self, ui: &mut U) {
        if let Err(e) = ui.remove_element(ELEMENT_KEY) {
            warn!("pisugar3 unload err: {:?}", e);
        }
        self.ready = false;
    }
}
