// src/main.rs
//
// Calculatrice à touches — point d’entrée NATIF + WEB (WASM)
// ----------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native, ou mode sans fenêtre (--touches)
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
pub const TITRE_APP: &str = "Calculatrice à touches";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::process::ExitCode;

    use clap::Parser;
    use tracing::info;
    use tracing_subscriber::EnvFilter;

    use super::{egui, AppCalc, TITRE_APP};
    use crate::noyau::{ExpressionAccumulator, Symbol};

    /// Filtre de logs par défaut (si ni RUST_LOG ni --log).
    const LOG_DEFAUT: &str = "warn";

    #[derive(Parser, Debug)]
    #[command(name = "calculatrice_touches", version, about = TITRE_APP)]
    pub struct Cli {
        /// Suite de touches à jouer sans fenêtre, ex: "2+3*4=" (C = effacer).
        #[arg(long, value_name = "SEQ")]
        pub touches: Option<String>,

        /// Avec --touches : affiche l’écran après chaque touche.
        #[arg(long, requires = "touches")]
        pub trace: bool,

        /// Filtre tracing (ex: "debug", "calculatrice_touches=trace").
        #[arg(long, value_name = "FILTRE")]
        pub log: Option<String>,
    }

    pub fn init_logs(directive: Option<&str>) {
        let filtre = match directive {
            Some(d) => EnvFilter::new(d),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(LOG_DEFAUT)),
        };

        // stderr : stdout reste réservé à l’écran en mode --touches
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filtre)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Traduit une séquence en symboles (espaces ignorés).
    /// Erreur = premier caractère inconnu.
    pub fn lire_touches(seq: &str) -> Result<Vec<Symbol>, char> {
        seq.chars()
            .filter(|c| !c.is_whitespace())
            .map(Symbol::try_from)
            .collect()
    }

    /// Mode sans fenêtre : joue les touches, retourne les écrans à imprimer.
    pub fn jouer(symboles: &[Symbol], trace: bool) -> Vec<String> {
        let mut acc = ExpressionAccumulator::new();
        let mut ecrans = Vec::new();
        for s in symboles {
            let d = acc.apply(*s);
            if trace {
                ecrans.push(d.texte().to_string());
            }
        }
        if !trace {
            ecrans.push(acc.affichage().texte().to_string());
        }
        ecrans
    }

    pub fn fenetre() -> eframe::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([320.0, 420.0])
                .with_min_inner_size([300.0, 400.0]),
            ..Default::default()
        };

        info!("démarrage fenêtre");
        eframe::run_native(
            TITRE_APP,
            options,
            Box::new(|_cc| Ok(Box::<AppCalc>::default())),
        )
    }

    pub fn main() -> ExitCode {
        let cli = Cli::parse();
        init_logs(cli.log.as_deref());

        let Some(seq) = cli.touches else {
            return match fenetre() {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Erreur: {e}");
                    ExitCode::FAILURE
                }
            };
        };

        match lire_touches(&seq) {
            Ok(symboles) => {
                for ecran in jouer(&symboles, cli.trace) {
                    println!("{ecran}");
                }
                ExitCode::SUCCESS
            }
            Err(c) => {
                eprintln!("Erreur: touche inconnue '{c}'");
                ExitCode::FAILURE
            }
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    natif::main()
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let canvas: HtmlCanvasElement = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
