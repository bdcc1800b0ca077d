use log::warn;

/// BF16 peak FLOPs by accelerator name, most specific patterns first.
/// A device matches when its lowercased name contains every pattern.
const PEAK_FLOPS_TABLE: &[(&[&str], f64)] = &[
    // NVIDIA Blackwell
    (&["gb200"], 2.5e15),
    (&["grace blackwell"], 2.5e15),
    (&["b200"], 2.25e15),
    (&["b100"], 1.8e15),
    (&["gb10"], 35e12),
    // NVIDIA Hopper
    (&["h200", "nvl"], 836e12),
    (&["h200", "pcie"], 836e12),
    (&["h200"], 989e12),
    (&["h100", "nvl"], 835e12),
    (&["h100", "pcie"], 756e12),
    (&["h100"], 989e12),
    (&["h800", "nvl"], 989e12),
    (&["h800"], 756e12),
    // NVIDIA Ampere data center
    (&["a100"], 312e12),
    (&["a800"], 312e12),
    (&["a40"], 149.7e12),
    (&["a30"], 165e12),
    // NVIDIA Ada data center
    (&["l40s"], 362e12),
    (&["l40-s"], 362e12),
    (&["l40 s"], 362e12),
    (&["l4"], 121e12),
    // AMD CDNA accelerators
    (&["mi355"], 2.5e15),
    (&["mi325"], 1.3074e15),
    (&["mi300x"], 1.3074e15),
    (&["mi300a"], 980.6e12),
    (&["mi250x"], 383e12),
    (&["mi250"], 362.1e12),
    // Consumer RTX
    (&["5090"], 209.5e12),
    (&["4090"], 165.2e12),
    (&["3090"], 71e12),
];

/// Theoretical BF16 peak FLOPs for a device name as the driver reports it.
///
/// Unknown devices get `f64::INFINITY` so a derived MFU reads as 0% rather
/// than a wrong guess.
pub fn peak_flops_bf16(device_name: &str) -> f64 {
    let name = device_name.to_lowercase();
    for (patterns, flops) in PEAK_FLOPS_TABLE {
        if patterns.iter().all(|p| name.contains(p)) {
            return *flops;
        }
    }
    warn!(device = device_name; "peak FLOPs undefined, MFU will read as 0%");
    f64::INFINITY
}
