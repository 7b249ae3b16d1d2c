// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter Traits,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod gpio_service;

pub use gpio_service::GpioLineService;
pub use led_core::{LedError, PeripheralService};
