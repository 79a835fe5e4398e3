use clap::Args;
use poke_extract::CanonicalKey;

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Raw species token (`MR__MIME`, `NIDORAN_F`, `RATTATA_ALOLAN`)
    pub token: String,

    /// Explicit form token; otherwise a known form suffix is split off
    #[arg(short, long)]
    pub form: Option<String>,
}

pub fn execute(args: NormalizeArgs) {
    let key = match &args.form {
        Some(form) => CanonicalKey::new(&args.token, Some(form)),
        None => CanonicalKey::from_combined(&args.token),
    };
    println!("{key}");
    if let Some(form) = key.form() {
        println!("  base: {}", key.base_name());
        println!("  form: {}", form.as_str());
    }
}
