use clap::Args;
use poke_extract::map_encounter_rates;

#[derive(Args, Debug)]
pub struct RatesArgs {
    /// Encounter method (`grass`, `surf`, `fish_good`, ...)
    pub method: String,

    /// Number of species in the slot group
    pub count: usize,
}

pub fn execute(args: RatesArgs) {
    let slots: Vec<String> = (1..=args.count).map(|slot| format!("slot {slot}")).collect();
    let rates = map_encounter_rates(&slots, &args.method);
    for (slot, rate) in slots.iter().zip(&rates) {
        println!("{slot:>8}: {rate:>3}%");
    }
    println!("{:>8}: {:>3}%", "total", rates.iter().map(|&r| u32::from(r)).sum::<u32>());
}
