#![no_main]

use libfuzzer_sys::fuzz_target;
use ra7ma_syntax::FrontendConfig;
use ra7ma_syntax::include::NoIncludes;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let analysis = ra7ma::analyze(s, &mut NoIncludes, &FrontendConfig::default());
        // Recovery must always close every scope and finish inside the iteration budget.
        assert_eq!(analysis.symbols.depth(), 0);
        assert!(!analysis.report.halted);
    }
});
