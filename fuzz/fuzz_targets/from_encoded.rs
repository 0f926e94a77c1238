#![no_main]

use libfuzzer_sys::fuzz_target;
use oauth_params::ParameterList;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(mut list) = ParameterList::from_encoded(input) {
            let encoded = list.sort().encoded();
            let reparsed = ParameterList::from_encoded(&encoded).unwrap();
            assert_eq!(reparsed, list);
        }
    }
});
