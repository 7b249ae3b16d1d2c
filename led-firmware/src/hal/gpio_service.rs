// GPIO Line Service - Peripheral Access Service über esp-hal
//
// Implementiert das PeripheralService-Trait über einen echten
// GPIO-Output, damit der LED-Handle auf Hardware läuft.

use esp_hal::gpio::{Level, Output};
use led_core::{LedError, PeripheralService};

/// Peripheral Access Service mit genau einem GPIO-Slot
///
/// Verwaltet eine einzelne, bereits als Output erstellte GPIO-Line
/// unter ihrem Pin-Namen. Der Registry-Kontrakt gilt trotzdem:
/// exklusiver Claim pro acquire, zweites acquire schlägt fehl,
/// release legt die Line zurück in den Slot.
///
/// esp-hal adressiert Pins typisiert statt per Name; der Output wird
/// daher vorab aus dem Peripheral erstellt und hier registriert.
pub struct GpioLineService<'d> {
    pin_name: &'static str,
    slot: Option<Output<'d>>,
}

impl<'d> GpioLineService<'d> {
    /// Registriert einen GPIO-Output unter seinem Pin-Namen
    ///
    /// # Parameter
    /// - `pin_name`: Name unter dem die Line geöffnet werden kann (z.B. "GPIO8")
    /// - `output`: der esp-hal GPIO-Output für diese Line
    pub fn new(pin_name: &'static str, output: Output<'d>) -> Self {
        Self {
            pin_name,
            slot: Some(output),
        }
    }
}

impl<'d> PeripheralService for GpioLineService<'d> {
    type Line = Output<'d>;

    fn acquire_line(&mut self, name: &str) -> Result<Output<'d>, LedError> {
        if name != self.pin_name {
            // Unbekannter Pin-Name: dieser Service kennt genau eine Line
            return Err(LedError::OpenFailed);
        }
        // Leerer Slot = Line ist bereits belegt
        self.slot.take().ok_or(LedError::OpenFailed)
    }

    fn set_direction_output_low(&mut self, line: &mut Output<'d>) -> Result<(), LedError> {
        // Richtung ist beim esp-hal Output schon fixiert; nur den
        // deterministischen Startpegel erzwingen
        line.set_level(Level::Low);
        Ok(())
    }

    fn set_value(&mut self, line: &mut Output<'d>, on: bool) -> Result<(), LedError> {
        // GPIO-Schreibzugriff auf dem ESP32 ist infallibel
        line.set_level(if on { Level::High } else { Level::Low });
        Ok(())
    }

    fn release_line(&mut self, line: Output<'d>) -> Result<(), LedError> {
        self.slot = Some(line);
        Ok(())
    }
}
