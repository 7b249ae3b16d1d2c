// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// LED Konfiguration
// ============================================================================

/// Pin-Name der LED-Line im Peripheral Access Service
/// Muss zum physischen GPIO-Pin unten passen
pub const LED_PIN_NAME: &str = "GPIO8";

/// GPIO-Pin für die LED
pub const LED_GPIO_PIN: u8 = 8;

/// Blink-Intervall in Sekunden
pub const BLINK_INTERVAL_SECS: u64 = 1;
