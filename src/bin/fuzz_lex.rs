// src/bin/fuzz_lex.rs
// Generate big random inputs, scan them, and check the structural invariants
// (reconstruction, positions, traces, histogram).
// Extras:
//   - FUZZ_SAVE=1 and FUZZ_DIR=... save generated fuzz cases
//   - FUZZ_INPUT=path         replay a saved case
//   - FUZZ_EX=<files>         comma/colon-separated list of handcrafted .c files
//   - FUZZ_EX_DIR=<dir>       directory of .c files (default: "lexer_tests")
//
// Sidecar golden files: <case>.tokens.json with {"tokens":[{"kind":"...", "text":"..."}...]}.
// For handcrafted cases, if a golden exists, the scan must match it exactly.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Instant,
};

use lexiscan::{
    dev::{check::check_scan, generator::gen_source},
    lexer::{Scan, TokenKind, ids::unix_millis, scan, transition_table},
};
use rand::{SeedableRng, rngs::StdRng};

// ------------------ goldens ------------------

#[derive(serde::Deserialize)]
struct Golden {
    tokens: Vec<GoldenTok>,
}
#[derive(serde::Deserialize)]
struct GoldenTok {
    kind: String,
    text: String,
}

fn load_golden_for(base: &Path) -> Option<Golden> {
    let candidates = [
        base.with_extension("tokens.json"),
        base.with_extension("golden.json"),
    ];
    for p in candidates {
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            match serde_json::from_str::<Golden>(&s) {
                Ok(g) => return Some(g),
                Err(e) => {
                    eprintln!("[golden] failed to parse {}: {e}", p.display());
                    return None;
                }
            }
        }
    }
    None
}

fn check_against_golden(out: &Scan, golden: &Golden) -> bool {
    let got: Vec<(TokenKind, &str)> = out
        .tokens
        .iter()
        .map(|t| (t.kind, t.lexeme.as_str()))
        .collect();
    if got.len() != golden.tokens.len() {
        eprintln!(
            "[golden] count mismatch: got={} expected={}",
            got.len(),
            golden.tokens.len()
        );
    }
    let n = got.len().min(golden.tokens.len());
    for i in 0..n {
        let want = &golden.tokens[i];
        let want_kind = TokenKind::from_wire(&want.kind);
        if got[i] != (want_kind, want.text.as_str()) {
            eprintln!(
                "[golden] first mismatch at #{i}: got={:?} want=({}, {:?})",
                got[i], want.kind, want.text
            );
            return false;
        }
    }
    got.len() == golden.tokens.len()
}

// ------------------ main ------------------

fn main() {
    env_logger::init();

    // --- REPLAY A SINGLE CASE ---
    if let Ok(path) = std::env::var("FUZZ_INPUT") {
        eprintln!("[replay] reading {}", path);
        let s = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: failed to read FUZZ_INPUT {path}: {e}");
                std::process::exit(1);
            }
        };
        if !run_once(&s, None, None) {
            std::process::exit(1);
        }
        return;
    }

    // --- HANDCRAFTED EXAMPLES (run before fuzzing) ---
    let examples = collect_examples();
    if !examples.is_empty() {
        eprintln!("[ex] running {} handcrafted example(s)…", examples.len());
        for (j, p) in examples.iter().enumerate() {
            match fs::read_to_string(p) {
                Ok(s) => {
                    eprintln!("[ex {j}] {}", p.display());
                    if !run_once(&s, None, Some(p.as_path())) {
                        std::process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("[ex {j}] failed to read {}: {e}", p.display());
                    std::process::exit(1);
                }
            }
        }
    }

    // --- FUZZ MODE ---
    let save_cases = std::env::var("FUZZ_SAVE").ok().as_deref() == Some("1");
    let out_dir = std::env::var("FUZZ_DIR").unwrap_or_else(|_| "fuzz-cases".to_string());
    let len: usize = std::env::var("FUZZ_LEN")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(1_000_000);
    let iters: usize = std::env::var("FUZZ_ITERS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3);
    let seed: u64 = std::env::var("FUZZ_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    eprintln!("[fuzz] len={len} iters={iters} seed={seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    if save_cases {
        if let Err(e) = fs::create_dir_all(&out_dir) {
            eprintln!("error: failed to create {}: {e}", out_dir);
            std::process::exit(1);
        }
    }

    for i in 0..iters {
        let s = gen_source(&mut rng, len);
        eprintln!("[fuzz] iter {i}: generated {} bytes", s.len());

        if save_cases {
            match save_case(&out_dir, seed, i, &s) {
                Ok(path) => eprintln!("[save] wrote {}", path.display()),
                Err(e) => eprintln!("[save] failed: {e}"),
            }
        }

        if !run_once(&s, Some(i), None) {
            std::process::exit(1);
        }
    }
    eprintln!("[fuzz] all iterations passed ✅");
}

// ---------- run one (invariants [+ optional golden]) ----------

fn run_once(src: &str, iter: Option<usize>, golden_for: Option<&Path>) -> bool {
    let t0 = Instant::now();
    let out = scan(src);
    let ms = t0.elapsed().as_millis();

    let mut ok = match check_scan(transition_table(), src, &out) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("[check] {e}");
            false
        }
    };

    let tag = match iter {
        Some(i) => format!("[fuzz] iter {i}"),
        None => "[replay]".to_string(),
    };
    eprintln!(
        "{tag}: scan {ms} ms  |  tokens = {}  -> {}",
        out.tokens.len(),
        if ok { "OK" } else { "FAILED!" }
    );

    if let Some(p) = golden_for {
        match load_golden_for(p) {
            Some(g) => ok &= check_against_golden(&out, &g),
            None => eprintln!("[golden] no sidecar found for {}", p.display()),
        }
    }
    ok
}

// ---------- handcrafted examples discovery ----------

fn collect_examples() -> Vec<PathBuf> {
    // FUZZ_EX takes precedence; split on ',' or ':'
    if let Ok(list) = std::env::var("FUZZ_EX") {
        let mut out = Vec::new();
        for part in list.split([',', ':']) {
            let p = PathBuf::from(part.trim());
            if !p.as_os_str().is_empty() && p.exists() {
                out.push(p);
            }
        }
        if !out.is_empty() {
            return out;
        }
    }

    let dir = std::env::var("FUZZ_EX_DIR").unwrap_or_else(|_| "lexer_tests".into());
    let p = Path::new(&dir);
    if !p.is_dir() {
        return Vec::new();
    }

    let mut out = Vec::new();
    if let Ok(rd) = fs::read_dir(p) {
        for ent in rd.flatten() {
            let path = ent.path();
            if path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("c"))
            {
                out.push(path);
            }
        }
    }
    out.sort();
    out
}

// ---------- save helpers ----------

#[derive(serde::Serialize)]
struct CaseMeta<'a> {
    unix_ms: u64,
    seed: u64,
    iter: usize,
    actual_bytes: usize,
    note: &'a str,
}

fn save_case(dir: &str, seed: u64, iter: usize, src: &str) -> std::io::Result<PathBuf> {
    let base = format!("case_s{seed}_i{iter}_n{}.c", src.len());
    let path = Path::new(dir).join(base);
    fs::write(&path, src.as_bytes())?;

    let meta = CaseMeta {
        unix_ms: unix_millis(),
        seed,
        iter,
        actual_bytes: src.len(),
        note: "Replay with: FUZZ_INPUT=<this file> cargo run --bin fuzz_lex",
    };
    let mut f = fs::File::create(path.with_extension("meta.json"))?;
    writeln!(f, "{}", serde_json::to_string_pretty(&meta)?)?;
    Ok(path)
}
