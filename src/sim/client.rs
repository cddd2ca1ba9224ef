//! HTTP-Client für das Simulations-Backend (JSON, Envelope `{ data: T }`).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::{Road, TrafficSignal, Vehicle};

/// Untergrenze des Fahrzeug-Zuflusses (Fahrzeuge/Stunde).
pub const VEHICLE_INFLOW_MIN: u32 = 500;
/// Obergrenze des Fahrzeug-Zuflusses (Fahrzeuge/Stunde).
pub const VEHICLE_INFLOW_MAX: u32 = 2000;

/// Erfolgs-Envelope des Backends; `data` kann fehlen oder `null` sein.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

#[derive(Debug, Serialize)]
struct StartBody {
    #[serde(rename = "requestStart")]
    request_start: bool,
}

#[derive(Debug, Serialize)]
struct StopBody {
    #[serde(rename = "requestStop")]
    request_stop: bool,
}

#[derive(Debug, Serialize)]
struct ConfigBody<T> {
    config: T,
}

#[derive(Debug, Serialize)]
struct SpeedBody {
    speed: u32,
}

#[derive(Debug, Serialize)]
struct InflowBody {
    #[serde(rename = "vehicleInFlow")]
    vehicle_in_flow: u32,
}

/// Rechnet den UI-Geschwindigkeits-Multiplikator ins Wire-Format um.
///
/// Backend-Kontrakt: 1 bleibt 1, alles andere wird verdoppelt.
pub fn wire_speed(multiplier: u32) -> u32 {
    if multiplier == 1 {
        1
    } else {
        multiplier * 2
    }
}

/// Klemmt den Fahrzeug-Zufluss client-seitig in den gültigen Bereich.
pub fn clamp_inflow(inflow: u32) -> u32 {
    inflow.clamp(VEHICLE_INFLOW_MIN, VEHICLE_INFLOW_MAX)
}

/// Dünner HTTP-Client über den Backend-Endpunkten.
///
/// Jede Methode bildet genau einen Endpunkt ab; Fehlerbehandlung
/// (Loggen + Verwerfen) liegt beim Aufrufer in der Sync-Schleife.
#[derive(Debug, Clone)]
pub struct SimClient {
    http: reqwest::Client,
    base_url: String,
}

impl SimClient {
    /// Erstellt einen Client für die angegebene Basis-URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<Option<T>> {
        let url = format!("{}{}", self.base_url, path);
        let envelope: Envelope<T> = self.http.get(&url).send().await?.json().await?;
        Ok(envelope.data)
    }

    async fn post_body<B: Serialize>(&self, path: &str, body: &B) -> anyhow::Result<()> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.post(&url).json(body).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("{}: Status {}", path, response.status());
        }
        Ok(())
    }

    // ── Snapshots ───────────────────────────────────────────────

    /// Aktueller Fahrzeug-Snapshot.
    pub async fn fetch_vehicles(&self) -> anyhow::Result<Option<Vec<Vehicle>>> {
        self.get_data("/api/vehicles").await
    }

    /// Aktuelles Straßen-Layout.
    pub async fn fetch_roads(&self) -> anyhow::Result<Option<Vec<Road>>> {
        self.get_data("/api/roads").await
    }

    /// Aktuelle Ampel-Zustände.
    pub async fn fetch_signals(&self) -> anyhow::Result<Option<Vec<TrafficSignal>>> {
        self.get_data("/api/traffic-signals").await
    }

    /// Initiale Ampel-Konfiguration.
    pub async fn fetch_signals_init(&self) -> anyhow::Result<Option<Vec<TrafficSignal>>> {
        self.get_data("/api/traffic-signals-init").await
    }

    /// Setzt das Straßen-Layout auf die Baseline zurück.
    pub async fn fetch_roads_reset(&self) -> anyhow::Result<Option<Vec<Road>>> {
        self.get_data("/api/roads-reset").await
    }

    /// Setzt die Ampel-Konfiguration auf die Baseline zurück.
    pub async fn fetch_signals_reset(&self) -> anyhow::Result<Option<Vec<TrafficSignal>>> {
        self.get_data("/api/traffic-signals-reset").await
    }

    // ── Session-Kommandos ───────────────────────────────────────

    /// Startet die Simulations-Session.
    pub async fn post_start(&self) -> anyhow::Result<()> {
        self.post_body("/api/simulation-start", &StartBody { request_start: true })
            .await
    }

    /// Setzt eine pausierte Session fort.
    pub async fn post_resume(&self) -> anyhow::Result<()> {
        self.post_body("/api/simulation-resume", &StartBody { request_start: true })
            .await
    }

    /// Pausiert die laufende Session.
    pub async fn post_pause(&self) -> anyhow::Result<()> {
        self.post_body("/api/simulation-pause", &StartBody { request_start: true })
            .await
    }

    /// Stoppt die Session.
    pub async fn post_stop(&self) -> anyhow::Result<()> {
        self.post_body("/api/simulation-stop", &StopBody { request_stop: true })
            .await
    }

    // ── Konfigurations-Push ─────────────────────────────────────

    /// Überträgt das Straßen-Layout.
    pub async fn push_road_config(&self, roads: &[Road]) -> anyhow::Result<()> {
        self.post_body("/api/roads-config", &ConfigBody { config: roads })
            .await
    }

    /// Überträgt die Ampel-Konfiguration.
    pub async fn push_signal_config(&self, signals: &[TrafficSignal]) -> anyhow::Result<()> {
        self.post_body("/api/traffic-signals-config", &ConfigBody { config: signals })
            .await
    }

    /// Überträgt den Geschwindigkeits-Multiplikator im Wire-Format.
    pub async fn push_speed(&self, multiplier: u32) -> anyhow::Result<()> {
        self.post_body("/api/simulation-speed", &SpeedBody { speed: wire_speed(multiplier) })
            .await
    }

    /// Überträgt den (geklemmten) Fahrzeug-Zufluss.
    pub async fn push_vehicle_inflow(&self, inflow: u32) -> anyhow::Result<()> {
        self.post_body(
            "/api/vehicle-in-flow",
            &InflowBody {
                vehicle_in_flow: clamp_inflow(inflow),
            },
        )
        .await
    }
}
