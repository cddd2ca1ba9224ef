//! Zustandsmaschine der Simulations-Session.
//!
//! Die Maschine ist bewusst rein: Übergänge liefern das auszuführende
//! Kommando zurück, die Netzwerk-Seite erledigt die `SyncLoop`.

/// Poll-Intervall bei Echtzeit-Geschwindigkeit (Multiplikator 1).
pub const POLL_INTERVAL_REALTIME_MS: u64 = 1000;
/// Poll-Intervall bei beschleunigter Simulation.
pub const POLL_INTERVAL_FAST_MS: u64 = 500;

/// Zustand der Simulations-Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Keine Session aktiv
    #[default]
    Idle,
    /// Session läuft, Polling aktiv
    Running,
    /// Session pausiert, letzter Snapshot bleibt stehen
    Paused,
}

/// Netzwerk-Kommando, das ein Zustandsübergang auslöst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Konfiguration übertragen und Session starten (aus Idle)
    ConfigureAndStart,
    /// Nur Resume senden, keine Re-Konfiguration (aus Paused)
    Resume,
    /// Pause senden, Polling anhalten
    Pause,
    /// Stop senden, zurück zu Idle
    Stop,
}

impl SessionState {
    /// Play-Taste: startet aus Idle, setzt aus Paused fort.
    ///
    /// In Running ist die Taste wirkungslos.
    pub fn on_start(self) -> Option<(SessionCommand, SessionState)> {
        match self {
            SessionState::Idle => Some((SessionCommand::ConfigureAndStart, SessionState::Running)),
            SessionState::Paused => Some((SessionCommand::Resume, SessionState::Running)),
            SessionState::Running => None,
        }
    }

    /// Pause-Taste: nur aus Running erlaubt.
    pub fn on_pause(self) -> Option<(SessionCommand, SessionState)> {
        match self {
            SessionState::Running => Some((SessionCommand::Pause, SessionState::Paused)),
            _ => None,
        }
    }

    /// Stop-Taste: aus Running und Paused erlaubt.
    pub fn on_stop(self) -> Option<(SessionCommand, SessionState)> {
        match self {
            SessionState::Running | SessionState::Paused => {
                Some((SessionCommand::Stop, SessionState::Idle))
            }
            SessionState::Idle => None,
        }
    }

    /// Gibt zurück, ob eine Session aktiv ist (laufend oder pausiert).
    pub fn is_active(self) -> bool {
        !matches!(self, SessionState::Idle)
    }
}

/// Poll-Kadenz in Millisekunden für einen Geschwindigkeits-Multiplikator.
///
/// Binär, nicht proportional: 1000 ms bei Echtzeit, sonst 500 ms,
/// unabhängig vom konkreten Multiplikator-Wert.
pub fn poll_interval_ms(speed_multiplier: u32) -> u64 {
    if speed_multiplier == 1 {
        POLL_INTERVAL_REALTIME_MS
    } else {
        POLL_INTERVAL_FAST_MS
    }
}
