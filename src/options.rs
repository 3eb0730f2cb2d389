//! Options de démarrage (natif seulement).
//!
//! Rien n’est persisté : ces options ne fixent que l’état initial du moteur
//! et le niveau de journalisation.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::noyau::{Mode, UniteAngle};

/// Calculatrice standard / scientifique
#[derive(Parser, Debug)]
#[command(name = "calculatrice")]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// Pavé affiché au démarrage (standard, scientifique)
    #[arg(long, default_value = "standard")]
    pub mode: Mode,

    /// Unité d’angle initiale pour sin/cos/tan (rad, deg)
    #[arg(long, default_value = "rad")]
    pub angle: UniteAngle,

    /// Verbosité des journaux (-v, -vv, -vvv) ; RUST_LOG est prioritaire
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Options {
    pub fn niveau_journal(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Installe l’abonné `tracing` (sortie standard).
pub fn installer_journal(options: &Options) {
    let filtre = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.niveau_journal()));

    // Déjà installé (tests, ré-entrée) : on garde le premier.
    let _ = tracing_subscriber::fmt().with_env_filter(filtre).try_init();
}
