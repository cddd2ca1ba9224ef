//! Sync-Schleife: treibt das Backend asynchron und speist Snapshots
//! zurück in den Editor-Thread.
//!
//! Der egui-Thread besitzt den gesamten mutierbaren Editor-Zustand;
//! sämtliche Netzwerkarbeit läuft auf einer eigenen tokio-Runtime.
//! Ergebnisse wandern als `SimEvent` über einen mpsc-Kanal zurück und
//! werden einmal pro Frame abgeholt; es gibt keinen geteilten
//! mutierbaren Zustand zwischen den Threads.

use std::sync::mpsc;
use std::time::Duration;

use crate::core::{Road, TrafficSignal, Vehicle};
use crate::sim::client::SimClient;
use crate::sim::session::poll_interval_ms;

/// Snapshot-Ereignis aus der Sync-Schleife an den Editor-Thread.
///
/// Jede Variante ersetzt den zugehörigen Zustand im Ganzen; ein
/// ausbleibendes Ereignis lässt den letzten Stand unverändert.
#[derive(Debug, Clone)]
pub enum SimEvent {
    /// Fahrzeug-Snapshot aus dem Poll
    Vehicles(Vec<Vehicle>),
    /// Ampel-Zustände aus Poll, Init oder Reset
    Signals(Vec<TrafficSignal>),
    /// Straßen-Layout aus Bootstrap oder Reset
    Roads(Vec<Road>),
}

/// Besitzt die tokio-Runtime und die Poll-Task der Session.
///
/// Die Poll-Schleife ist eine explizite, abbrechbare Task: sie wird bei
/// Start/Resume erzeugt und bei Pause/Stop exakt einmal abgebrochen.
/// Zustandsübergänge und Task-Lebensdauer fallen zusammen.
pub struct SyncLoop {
    runtime: tokio::runtime::Runtime,
    client: SimClient,
    events_tx: mpsc::Sender<SimEvent>,
    events_rx: mpsc::Receiver<SimEvent>,
    poll_task: Option<tokio::task::JoinHandle<()>>,
}

impl SyncLoop {
    /// Erstellt die Sync-Schleife mit eigener Multi-Thread-Runtime.
    pub fn new(client: SimClient) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let (events_tx, events_rx) = mpsc::channel();

        Ok(Self {
            runtime,
            client,
            events_tx,
            events_rx,
            poll_task: None,
        })
    }

    /// Holt alle seit dem letzten Frame eingetroffenen Ereignisse ab.
    pub fn drain_events(&self) -> Vec<SimEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.events_rx.try_recv() {
            events.push(event);
        }
        events
    }

    /// Lädt Straßen-Layout und initiale Ampel-Konfiguration (Bootstrap).
    pub fn request_initial_data(&self) {
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            match client.fetch_roads().await {
                Ok(Some(roads)) => {
                    let _ = tx.send(SimEvent::Roads(roads));
                }
                Ok(None) => log::warn!("Straßen-Bootstrap ohne Payload"),
                Err(e) => log::error!("Straßen-Bootstrap fehlgeschlagen: {e:#}"),
            }
            match client.fetch_signals_init().await {
                Ok(Some(signals)) => {
                    let _ = tx.send(SimEvent::Signals(signals));
                }
                Ok(None) => log::warn!("Ampel-Bootstrap ohne Payload"),
                Err(e) => log::error!("Ampel-Bootstrap fehlgeschlagen: {e:#}"),
            }
        });
    }

    /// Setzt Straßen und Ampeln auf die Backend-Baseline zurück.
    pub fn request_reset(&self) {
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            match client.fetch_roads_reset().await {
                Ok(Some(roads)) => {
                    let _ = tx.send(SimEvent::Roads(roads));
                }
                Ok(None) => log::warn!("Straßen-Reset ohne Payload"),
                Err(e) => log::error!("Straßen-Reset fehlgeschlagen: {e:#}"),
            }
            match client.fetch_signals_reset().await {
                Ok(Some(signals)) => {
                    let _ = tx.send(SimEvent::Signals(signals));
                }
                Ok(None) => log::warn!("Ampel-Reset ohne Payload"),
                Err(e) => log::error!("Ampel-Reset fehlgeschlagen: {e:#}"),
            }
        });
    }

    /// Startet eine Session aus Idle: Konfiguration übertragen, Start
    /// senden, dann Polling beginnen.
    ///
    /// Reihenfolge wie der Backend-Kontrakt sie erwartet: Straßen,
    /// Ampeln, Zufluss, Geschwindigkeit, Start.
    pub fn start_session(
        &mut self,
        roads: Vec<Road>,
        signals: Vec<TrafficSignal>,
        vehicle_inflow: u32,
        speed_multiplier: u32,
    ) {
        self.abort_polling();

        let client = self.client.clone();
        let tx = self.events_tx.clone();
        let interval_ms = poll_interval_ms(speed_multiplier);

        let handle = self.runtime.spawn(async move {
            if let Err(e) = client.push_road_config(&roads).await {
                log::error!("Straßen-Konfiguration fehlgeschlagen: {e:#}");
            }
            if let Err(e) = client.push_signal_config(&signals).await {
                log::error!("Ampel-Konfiguration fehlgeschlagen: {e:#}");
            }
            if let Err(e) = client.push_vehicle_inflow(vehicle_inflow).await {
                log::error!("Zufluss-Übertragung fehlgeschlagen: {e:#}");
            }
            if let Err(e) = client.push_speed(speed_multiplier).await {
                log::error!("Geschwindigkeits-Übertragung fehlgeschlagen: {e:#}");
            }
            if let Err(e) = client.post_start().await {
                log::error!("Simulations-Start fehlgeschlagen: {e:#}");
            }

            poll_forever(client, tx, interval_ms).await;
        });

        self.poll_task = Some(handle);
        log::info!(
            "Session gestartet (Zufluss {}, Multiplikator {}, Poll {} ms)",
            vehicle_inflow,
            speed_multiplier,
            interval_ms
        );
    }

    /// Setzt eine pausierte Session fort: nur Resume, keine Re-Konfiguration.
    pub fn resume_session(&mut self, speed_multiplier: u32) {
        self.abort_polling();

        let client = self.client.clone();
        let tx = self.events_tx.clone();
        let interval_ms = poll_interval_ms(speed_multiplier);

        let handle = self.runtime.spawn(async move {
            if let Err(e) = client.post_resume().await {
                log::error!("Simulations-Resume fehlgeschlagen: {e:#}");
            }
            poll_forever(client, tx, interval_ms).await;
        });

        self.poll_task = Some(handle);
        log::info!("Session fortgesetzt (Poll {} ms)", interval_ms);
    }

    /// Pausiert die Session: Polling anhalten, letzter Snapshot bleibt.
    pub fn pause_session(&mut self) {
        self.abort_polling();
        let client = self.client.clone();
        self.runtime.spawn(async move {
            if let Err(e) = client.post_pause().await {
                log::error!("Simulations-Pause fehlgeschlagen: {e:#}");
            }
        });
        log::info!("Session pausiert");
    }

    /// Stoppt die Session und kehrt zu Idle zurück.
    pub fn stop_session(&mut self) {
        self.abort_polling();
        let client = self.client.clone();
        self.runtime.spawn(async move {
            if let Err(e) = client.post_stop().await {
                log::error!("Simulations-Stop fehlgeschlagen: {e:#}");
            }
        });
        log::info!("Session gestoppt");
    }

    /// Bricht nur das Polling ab, ohne Backend-Kommando.
    ///
    /// Wird beim Rückwechsel in den Build-Modus benutzt: die lokalen
    /// Session-Flags werden zurückgesetzt, die Backend-Session läuft
    /// bewusst weiter (kein implizites Stop).
    pub fn abort_polling(&mut self) {
        if let Some(handle) = self.poll_task.take() {
            handle.abort();
        }
    }

    /// Gibt zurück, ob aktuell eine Poll-Task lebt.
    pub fn is_polling(&self) -> bool {
        self.poll_task
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}

/// Endlose Poll-Schleife: Fahrzeuge und Ampeln im Takt abholen.
///
/// Ein fehlgeschlagener Abruf lässt den vorherigen Snapshot stehen und
/// wird beim nächsten Tick auf natürliche Weise erneut versucht.
async fn poll_forever(client: SimClient, tx: mpsc::Sender<SimEvent>, interval_ms: u64) {
    let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms));

    loop {
        ticker.tick().await;

        match client.fetch_vehicles().await {
            Ok(Some(vehicles)) => {
                let _ = tx.send(SimEvent::Vehicles(vehicles));
            }
            Ok(None) => log::warn!("Fahrzeug-Poll ohne Payload, Stand bleibt"),
            Err(e) => log::error!("Fahrzeug-Poll fehlgeschlagen: {e:#}"),
        }

        match client.fetch_signals().await {
            Ok(Some(signals)) => {
                let _ = tx.send(SimEvent::Signals(signals));
            }
            Ok(None) => log::warn!("Ampel-Poll ohne Payload, Stand bleibt"),
            Err(e) => log::error!("Ampel-Poll fehlgeschlagen: {e:#}"),
        }
    }
}

impl Drop for SyncLoop {
    fn drop(&mut self) {
        self.abort_polling();
    }
}
