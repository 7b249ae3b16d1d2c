//! LED Handle über eine GPIO-Line
//!
//! Kapselt genau eine als Output konfigurierte GPIO-Line
//! für binäre An/Aus-Steuerung mit garantierter Freigabe.

use core::mem;

use crate::traits::{LedError, PeripheralService};

/// Zustand der GPIO-Line im Handle
///
/// Ersetzt das nullable-Feld der klassischen Variante: Operationen
/// nach close() schlagen laut fehl statt still nichts zu tun.
enum LineState<L> {
    Open(L),
    Closed,
}

/// LED Handle - exklusiver Owner einer GPIO-Output-Line
///
/// Lifecycle: `Uninitialized → Open → Closed`. Nur im Zustand `Open`
/// ist `turn()` gültig, `Closed` ist terminal.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `S: PeripheralService` ermöglicht:
/// - Real Hardware (GpioLineService) im Production-Code
/// - Fake Implementation (FakePeripheralService) in Unit Tests
///
/// # Resource-Freigabe (RAII)
/// Die Line wird auf allen Exit-Pfaden genau einmal freigegeben:
/// entweder durch explizites `close()` (Fehler werden gemeldet) oder
/// spätestens durch `Drop` (Fehler können dort nicht gemeldet werden).
pub struct Led<S: PeripheralService> {
    service: S,
    state: LineState<S::Line>,
}

impl<S: PeripheralService> Led<S> {
    /// Öffnet die benannte GPIO-Line und konfiguriert sie als Output
    /// mit initial niedrigem Pegel (LED startet deterministisch "aus")
    ///
    /// # Parameter
    /// - `service`: Peripheral Access Service (Hardware oder Fake)
    /// - `pin_name`: Pin-Name wie vom Service erwartet (z.B. "GPIO8");
    ///   keine Format-Validierung hier, das ist Sache des Service
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::OpenFailed` zurück wenn die Line nicht geöffnet
    /// werden kann; es existiert dann kein Handle. Schlägt die
    /// Output-Konfiguration nach erfolgreichem Öffnen fehl, wird die
    /// bereits belegte Line wieder freigegeben bevor der Fehler
    /// zurückgeht (kein geleakter Claim im Fehlerpfad).
    pub fn new(mut service: S, pin_name: &str) -> Result<Self, LedError> {
        let mut line = service.acquire_line(pin_name)?;

        if let Err(e) = service.set_direction_output_low(&mut line) {
            // Claim darf den Konstruktor-Fehlerpfad nicht überleben
            let _ = service.release_line(line);
            return Err(e);
        }

        Ok(Self {
            service,
            state: LineState::Open(line),
        })
    }

    /// Schaltet die LED an (true) oder aus (false)
    ///
    /// Schreibt den Boolean direkt als logischen Pegel auf die Line.
    /// Kein Debouncing, kein Readback.
    ///
    /// # Fehlerbehandlung
    /// - `LedError::WriteFailed` wenn der Schreibzugriff fehlschlägt;
    ///   der Handle bleibt `Open`, der Hardware-Zustand ist dann
    ///   relativ zum letzten Schreibversuch unbestimmt
    /// - `LedError::LineClosed` nach `close()`
    pub fn turn(&mut self, on: bool) -> Result<(), LedError> {
        match &mut self.state {
            LineState::Open(line) => self.service.set_value(line, on),
            LineState::Closed => Err(LedError::LineClosed),
        }
    }

    /// true solange die Line noch nicht freigegeben wurde
    pub fn is_open(&self) -> bool {
        matches!(self.state, LineState::Open(_))
    }

    /// Gibt die GPIO-Line an den Peripheral Access Service zurück
    ///
    /// Der Handle ist danach terminal `Closed` - auch wenn die Freigabe
    /// selbst fehlschlägt (die Line gilt als logisch abgekoppelt, der
    /// Fehler wird gemeldet statt verschluckt).
    ///
    /// # Fehlerbehandlung
    /// - `LedError::CloseFailed` wenn der Service die Freigabe ablehnt
    /// - `LedError::LineClosed` bei doppeltem close(); die Freigabe
    ///   wird in dem Fall nicht erneut ausgeführt
    pub fn close(&mut self) -> Result<(), LedError> {
        match mem::replace(&mut self.state, LineState::Closed) {
            LineState::Open(line) => self.service.release_line(line),
            LineState::Closed => Err(LedError::LineClosed),
        }
    }
}

impl<S: PeripheralService> Drop for Led<S> {
    /// Auto-Freigabe beim Verlassen des Scopes (auch im Fehlerpfad)
    ///
    /// Drop kann keine Fehler melden - wer Freigabe-Fehler sehen will,
    /// ruft vorher explizit `close()` auf.
    fn drop(&mut self) {
        if let LineState::Open(line) = mem::replace(&mut self.state, LineState::Closed) {
            let _ = self.service.release_line(line);
        }
    }
}
