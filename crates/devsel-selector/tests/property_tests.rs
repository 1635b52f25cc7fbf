//! Property tests for selector formatting, grouping and planning.

use devsel_selector::{
    BackendFamily, BackendSelector, DeviceDescriptor, FamilyDevices, group_by_family, oneapi,
    plan_visible_devices,
};
use proptest::prelude::*;

fn family() -> impl Strategy<Value = BackendFamily> {
    prop::sample::select(BackendFamily::ALL.to_vec())
}

// IDs without the separator so the suffix can be split back apart.
fn device() -> impl Strategy<Value = DeviceDescriptor> {
    ("[A-Za-z0-9_-]{0,8}", family()).prop_map(|(id, family)| DeviceDescriptor::new(id, family))
}

fn devices() -> impl Strategy<Value = Vec<DeviceDescriptor>> {
    prop::collection::vec(device(), 0..24)
}

proptest! {
    #[test]
    fn oneapi_suffix_is_ordered_join_of_matching_ids(devices in devices()) {
        let env = oneapi::build_selector_env(&devices);
        prop_assert_eq!(env.name(), oneapi::ONEAPI_DEVICE_SELECTOR);

        let suffix = env.value().strip_prefix(oneapi::LEVEL_ZERO_PREFIX);
        prop_assert!(suffix.is_some(), "value must start with the prefix: {}", env.value());

        let expected: Vec<&str> = devices
            .iter()
            .filter(|d| d.family == BackendFamily::OneApi)
            .map(|d| d.id.as_str())
            .collect();
        prop_assert_eq!(suffix.unwrap(), expected.join(","));
    }

    #[test]
    fn every_selector_is_deterministic(devices in devices()) {
        for selector in BackendSelector::ALL {
            prop_assert_eq!(selector.build_env(&devices), selector.build_env(&devices));
        }
    }

    #[test]
    fn grouping_preserves_every_device_once(devices in devices()) {
        let groups = group_by_family(&devices);
        prop_assert_eq!(groups.iter().map(FamilyDevices::len).sum::<usize>(), devices.len());
        for group in &groups {
            prop_assert!(!group.is_empty());
            prop_assert!(group.iter().all(|d| d.family == group.family()));
        }
        let mut families: Vec<_> = groups.iter().map(FamilyDevices::family).collect();
        families.sort();
        families.dedup();
        prop_assert_eq!(families.len(), groups.len(), "families must not repeat");
    }

    #[test]
    fn group_formatting_matches_permissive_formatting(devices in devices()) {
        for group in group_by_family(&devices) {
            if let Some(selector) = BackendSelector::for_family(group.family()) {
                prop_assert_eq!(selector.build_env_for(&group), selector.build_env(&devices));
            }
        }
    }

    #[test]
    fn plan_has_one_entry_per_selectable_family(devices in devices()) {
        let plan = plan_visible_devices(&devices);
        let expected = group_by_family(&devices)
            .iter()
            .filter(|g| BackendSelector::for_family(g.family()).is_some())
            .count();
        prop_assert_eq!(plan.len(), expected);

        let mut names: Vec<_> = plan.iter().map(|env| env.name()).collect();
        names.sort_unstable();
        names.dedup();
        prop_assert_eq!(names.len(), plan.len());
    }
}
