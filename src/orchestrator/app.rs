//! Sesi terminal - lapisan orkestrasi
//!
//! ## Perintah
//!
//! - `set <Field> <nilai>` atau `<Field>=<nilai>`: isi field
//! - `submit`: kirim form
//! - `show`: gambar ulang form
//! - `load <file.toml>`: isi form dari file preset
//! - `clear`: kosongkan form
//! - `help`, `quit`
//!
//! Submit dijalankan sebagai task terpisah sehingga field tetap bisa diedit
//! selama request berjalan. Setiap notifikasi dari `FieldStore` maupun
//! `SubmissionOrchestrator` memicu gambar ulang.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::infrastructure::{ReqwestTransport, Transport};
use crate::models::{load_record_from_toml, Field, SubmitOutcome};
use crate::orchestrator::submission::SubmissionOrchestrator;
use crate::services::FieldStore;
use crate::utils::logging::log_startup;
use crate::view::{self, ViewModel};

const HELP_TEXT: &str = "\
Perintah:
  set <Field> <nilai>   isi field (atau <Field>=<nilai>)
  submit                kirim form
  show                  tampilkan form
  load <file.toml>      isi form dari file
  clear                 kosongkan form
  help                  tampilkan bantuan
  quit                  keluar";

/// Perintah dari pengguna
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(Field, String),
    Submit,
    Show,
    Load(PathBuf),
    Clear,
    Help,
    Quit,
}

impl Command {
    /// Parse satu baris input. `Ok(None)` untuk baris kosong.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "set" => {
                let (name, value) = match rest.split_once(char::is_whitespace) {
                    Some((name, value)) => (name, value.trim()),
                    None => (rest, ""),
                };
                Command::Set(parse_field(name)?, value.to_string())
            }
            "submit" | "send" => Command::Submit,
            "show" => Command::Show,
            "load" if !rest.is_empty() => Command::Load(PathBuf::from(rest)),
            "load" => return Err("Pemakaian: load <file.toml>".to_string()),
            "clear" => Command::Clear,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => match line.split_once('=') {
                Some((name, value)) => Command::Set(parse_field(name.trim())?, value.trim().to_string()),
                None => return Err(format!("Perintah tidak dikenal: {} (ketik help)", word)),
            },
        };

        Ok(Some(command))
    }
}

fn parse_field(name: &str) -> Result<Field, String> {
    Field::from_name(name).ok_or_else(|| {
        let names: Vec<&str> = Field::ALL.iter().map(|f| f.name()).collect();
        format!("Field tidak dikenal: {} (pilihan: {})", name, names.join(", "))
    })
}

/// Lanjut atau berhenti setelah satu perintah
enum Flow {
    Continue,
    Quit,
}

/// Aplikasi terminal
pub struct App<T> {
    config: Config,
    store: FieldStore,
    orchestrator: Arc<SubmissionOrchestrator<T>>,
}

impl App<ReqwestTransport> {
    /// Inisialisasi aplikasi dengan transport HTTP sungguhan
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let transport = ReqwestTransport::new().context("Gagal membuat HTTP client")?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T> App<T>
where
    T: Transport + Send + Sync + 'static,
{
    pub fn with_transport(config: Config, transport: T) -> Self {
        let orchestrator = Arc::new(SubmissionOrchestrator::from_config(transport, &config));
        Self {
            config,
            store: FieldStore::new(),
            orchestrator,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &FieldStore {
        &self.store
    }

    pub fn orchestrator(&self) -> &SubmissionOrchestrator<T> {
        &self.orchestrator
    }

    /// Jalankan sesi di stdin / stdout
    pub async fn run(&self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.run_with(stdin, stdout).await
    }

    /// Jalankan sesi dengan input / output tertentu.
    ///
    /// Berhenti pada `quit` atau saat input habis; request yang masih berjalan
    /// ditunggu sampai selesai lalu hasilnya digambar.
    pub async fn run_with<R, W>(&self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        let mut record_rx = self.store.subscribe();
        let mut state_rx = self.orchestrator.subscribe();
        let mut in_flight: Option<JoinHandle<SubmitOutcome>> = None;

        write_out(&mut output, HELP_TEXT).await?;
        self.redraw(&mut output).await?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line.context("Gagal membaca input")? else {
                        debug!("input habis");
                        break;
                    };
                    match self.handle_line(&line, &mut output, &mut in_flight).await? {
                        Flow::Continue => {}
                        Flow::Quit => break,
                    }
                }
                Ok(()) = record_rx.changed() => {
                    record_rx.borrow_and_update();
                    self.redraw(&mut output).await?;
                }
                Ok(()) = state_rx.changed() => {
                    state_rx.borrow_and_update();
                    self.redraw(&mut output).await?;
                }
            }
        }

        // tunggu request terakhir agar hasilnya sempat ditampilkan
        if let Some(handle) = in_flight.take() {
            handle.await.context("Task submit gagal")?;
            if state_rx.has_changed().unwrap_or(false) {
                self.redraw(&mut output).await?;
            }
        }

        output.flush().await?;
        Ok(())
    }

    async fn handle_line<W: AsyncWrite + Unpin>(
        &self,
        line: &str,
        output: &mut W,
        in_flight: &mut Option<JoinHandle<SubmitOutcome>>,
    ) -> Result<Flow> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(message) => {
                write_out(output, &message).await?;
                return Ok(Flow::Continue);
            }
        };

        debug!("perintah: {:?}", command);

        match command {
            Command::Set(field, value) => self.store.set_field(field, value),
            Command::Submit => {
                if let Some(message) = self.start_submit(in_flight) {
                    write_out(output, &message).await?;
                }
            }
            Command::Show => self.redraw(output).await?,
            Command::Load(path) => match load_record_from_toml(&path).await {
                Ok(record) => {
                    info!("📄 Form diisi dari {}", path.display());
                    self.store.load_record(record);
                }
                Err(e) => {
                    warn!("⚠️ {:#}", e);
                    write_out(output, &format!("Gagal memuat {}: {:#}", path.display(), e)).await?;
                }
            },
            Command::Clear => self.store.clear(),
            Command::Help => write_out(output, HELP_TEXT).await?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Mulai submit di task terpisah.
    ///
    /// Mengembalikan pesan untuk pengguna jika submit tidak dijalankan.
    fn start_submit(&self, in_flight: &mut Option<JoinHandle<SubmitOutcome>>) -> Option<String> {
        // tombol submit nonaktif selama Pending (termasuk task yang belum sempat jalan)
        let task_running = in_flight.as_ref().is_some_and(|handle| !handle.is_finished());
        if task_running || self.orchestrator.is_pending() {
            return Some("Masih memproses, tunggu hasil sebelumnya.".to_string());
        }

        let record = self.store.current_record();

        // input wajib diisi sebelum submit
        let missing = record.missing_fields();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|f| f.name()).collect();
            return Some(format!("Wajib diisi: {}", names.join(", ")));
        }

        let orchestrator = Arc::clone(&self.orchestrator);
        *in_flight = Some(tokio::spawn(async move { orchestrator.submit(record).await }));
        None
    }

    async fn redraw<W: AsyncWrite + Unpin>(&self, output: &mut W) -> Result<()> {
        let view = ViewModel::build(&self.store.current_record(), &self.orchestrator.state());
        write_out(output, &view::render(&view)).await
    }
}

async fn write_out<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    if !text.ends_with('\n') {
        output.write_all(b"\n").await?;
    }
    output.flush().await?;
    Ok(())
}
