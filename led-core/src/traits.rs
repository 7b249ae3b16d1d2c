//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// GPIO-Line konnte nicht geöffnet werden
    /// (nicht vorhanden, bereits belegt, oder Service nicht verfügbar)
    OpenFailed,
    /// Schreiben des Pegels ist fehlgeschlagen
    WriteFailed,
    /// Freigabe der GPIO-Line ist fehlgeschlagen
    CloseFailed,
    /// Operation auf einem bereits geschlossenen Handle
    LineClosed,
}

/// Trait für den Peripheral Access Service
///
/// Abstrahiert den Zugriff auf GPIO-Lines der Plattform
/// (Öffnen per Name, Pegel schreiben, Freigeben).
///
/// # Implementierungen
/// - **Production:** GpioLineService (esp-hal GPIO Output)
/// - **Testing:** FakePeripheralService (in-memory Fake)
///
/// Kein `Send`-Bound: der LED-Handle ist nicht thread-safe,
/// Aufrufer müssen Zugriffe extern serialisieren.
pub trait PeripheralService {
    /// Opaque Handle auf eine geöffnete GPIO-Line
    type Line;

    /// Öffnet die GPIO-Line mit dem gegebenen Namen (exklusiver Claim)
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::OpenFailed` zurück wenn die Line nicht existiert
    /// oder bereits von einem anderen Owner belegt ist
    fn acquire_line(&mut self, name: &str) -> Result<Self::Line, LedError>;

    /// Konfiguriert die Line als Output mit initial niedrigem Pegel
    fn set_direction_output_low(&mut self, line: &mut Self::Line) -> Result<(), LedError>;

    /// Schreibt den logischen Pegel der Line (true = high = an)
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn set_value(&mut self, line: &mut Self::Line, on: bool) -> Result<(), LedError>;

    /// Gibt die Line an den Peripheral Access Service zurück
    fn release_line(&mut self, line: Self::Line) -> Result<(), LedError>;
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::OpenFailed => defmt::write!(fmt, "OpenFailed"),
            LedError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
            LedError::CloseFailed => defmt::write!(fmt, "CloseFailed"),
            LedError::LineClosed => defmt::write!(fmt, "LineClosed"),
        }
    }
}
