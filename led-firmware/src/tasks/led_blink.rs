// LED Blink Task - Schaltet die LED über den LED-Handle
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use esp_hal::gpio::{Level, Output, OutputConfig};

use crate::config::{BLINK_INTERVAL_SECS, LED_PIN_NAME};
use crate::hal::GpioLineService;
use crate::{Led, PeripheralService};

/// LED Blink Logic - Testbare Logik ohne Hardware-Abhängigkeit
///
/// Schaltet die LED im konfigurierten Intervall abwechselnd an und aus.
/// Schreibfehler werden geloggt, der Handle bleibt offen; beim Verlassen
/// des Tasks gibt der Handle die Line per Drop frei.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `S: PeripheralService` ermöglicht:
/// - Real Hardware (GpioLineService) im Production-Code
/// - Fake Implementation (FakePeripheralService) in Unit Tests
///
/// # Parameter
/// - `led`: fertig konstruierter LED-Handle (Hardware oder Fake)
pub async fn led_blink_logic<S: PeripheralService>(mut led: Led<S>) {
    let mut on = false;

    // Hauptschleife: blinkt LED endlos
    loop {
        on = !on;

        info!("Blink! LED {}", if on { "an" } else { "aus" });

        // Pegel über den Handle schreiben (via Trait - Hardware oder Fake)
        if let Err(e) = led.turn(on) {
            error!("Failed to write LED value: {}", e);
        }

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_secs(BLINK_INTERVAL_SECS)).await;
    }
}

/// LED Blink Task - Embassy Task für parallele Ausführung
///
/// Dieser Task übernimmt die Hardware-Initialisierung und ruft dann
/// die testbare `led_blink_logic()` Funktion auf.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für die LED
#[embassy_executor::task]
pub async fn led_blink_task(gpio8: esp_hal::peripherals::GPIO8<'static>) {
    // GPIO-Output erstellen und im Peripheral Access Service registrieren
    let output = Output::new(gpio8, Level::Low, OutputConfig::default());
    let service = GpioLineService::new(LED_PIN_NAME, output);

    // LED-Handle konstruieren: öffnet die Line und zieht sie auf Low
    let led = match Led::new(service, LED_PIN_NAME) {
        Ok(led) => led,
        Err(e) => {
            error!("Failed to open LED line {}: {}", LED_PIN_NAME, e);
            return;
        }
    };

    // Blink-Logik aufrufen (jetzt testbar!)
    led_blink_logic(led).await;
}
