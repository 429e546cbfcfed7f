//! Static content for the landing, contracts and resources pages.
//!
//! Kept out of the views so the desktop app and the CLI list the same things.

/// Difficulty badge on an example contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    Beginner,
    Intermediate,
    Advanced,
}

impl Complexity {
    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Beginner => "Beginner",
            Complexity::Intermediate => "Intermediate",
            Complexity::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleContract {
    pub name: &'static str,
    pub description: &'static str,
    pub complexity: Complexity,
}

/// Feature blurbs on the landing page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// An external page the resources screen links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLink {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

/// Entry in the "Latest Updates" list. Announcements have no page yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Update {
    pub title: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub url: Option<&'static str>,
}

/// One numbered quick-start step, optionally naming the command to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStartStep {
    pub text: &'static str,
    pub command: Option<&'static str>,
}

/// Move module shown on the contracts page.
pub const COUNTER_MODULE: &str = r#"module example::counter {
    use sui::object::{Self, UID};
    use sui::transfer;
    use sui::tx_context::{Self, TxContext};

    struct Counter has key {
        id: UID,
        value: u64,
    }

    public fun create(ctx: &mut TxContext) {
        let counter = Counter {
            id: object::new(ctx),
            value: 0,
        };
        transfer::share_object(counter)
    }

    public entry fun increment(counter: &mut Counter) {
        counter.value = counter.value + 1;
    }
}"#;

pub const EXAMPLE_CONTRACTS: [ExampleContract; 4] = [
    ExampleContract {
        name: "Counter",
        description: "A simple counter contract that can be incremented",
        complexity: Complexity::Beginner,
    },
    ExampleContract {
        name: "ERC20-like Token",
        description: "Implementation of a fungible token standard",
        complexity: Complexity::Intermediate,
    },
    ExampleContract {
        name: "NFT Collection",
        description: "Create and manage unique digital assets",
        complexity: Complexity::Intermediate,
    },
    ExampleContract {
        name: "Marketplace",
        description: "Buy and sell digital assets with escrow",
        complexity: Complexity::Advanced,
    },
];

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Wallet Connect",
        description: "Securely connect your Sui wallet to interact with the devnet and testnet.",
    },
    Feature {
        title: "Faucet Access",
        description: "Request SUI tokens to test and develop on the network.",
    },
    Feature {
        title: "NFT Minting",
        description: "Create and manage non-fungible tokens on the testnet.",
    },
    Feature {
        title: "Contract Deployment",
        description: "Deploy and test smart contracts before going live.",
    },
];

/// Cards across the top of the resources page.
pub const RESOURCE_CARDS: [ResourceLink; 4] = [
    ResourceLink {
        title: "Documentation",
        description: "Comprehensive guides and API references for the Sui blockchain",
        url: "https://docs.sui.io",
    },
    ResourceLink {
        title: "Tutorials",
        description: "Step-by-step guides to learn Sui development",
        url: "https://docs.sui.io/guides/developer",
    },
    ResourceLink {
        title: "Video Guides",
        description: "Visual walkthroughs and educational content",
        url: "https://www.youtube.com/c/SuiNetwork",
    },
    ResourceLink {
        title: "Community",
        description: "Join the conversation with other Sui developers",
        url: "https://discord.gg/sui",
    },
];

pub const LATEST_UPDATES: [Update; 4] = [
    Update {
        title: "Sui Move Developer Bootcamp",
        date: "June 2023",
        description: "Join our online bootcamp to learn Move programming from scratch.",
        url: None,
    },
    Update {
        title: "Sui Framework v1.2.0 Release",
        date: "May 2023",
        description: "New features and improvements for the Sui framework.",
        url: None,
    },
    Update {
        title: "Introducing Sui Explorer API",
        date: "April 2023",
        description: "Access blockchain data programmatically with our new API.",
        url: None,
    },
    Update {
        title: "Move Language Specification Update",
        date: "March 2023",
        description: "Important changes to the Move language specification.",
        url: None,
    },
];

pub const QUICK_START: [QuickStartStep; 5] = [
    QuickStartStep {
        text: "Install the Sui CLI and development environment",
        command: None,
    },
    QuickStartStep {
        text: "Create your first Move package with",
        command: Some("sui move new"),
    },
    QuickStartStep {
        text: "Build your package with",
        command: Some("sui move build"),
    },
    QuickStartStep {
        text: "Test your code with",
        command: Some("sui move test"),
    },
    QuickStartStep {
        text: "Deploy your package to devnet with",
        command: Some("sui client publish"),
    },
];

pub const INSTALL_CLI_URL: &str = "https://docs.sui.io/build/install";

pub const TOP_RESOURCES: [ResourceLink; 3] = [
    ResourceLink {
        title: "Move Language Book",
        description: "Comprehensive guide to the Move programming language",
        url: "https://move-language.github.io/move/",
    },
    ResourceLink {
        title: "Sui Examples",
        description: "Repository of example Move packages and applications",
        url: "https://github.com/MystenLabs/sui/tree/main/examples",
    },
    ResourceLink {
        title: "Sui Framework Reference",
        description: "Documentation for the Sui framework modules and functions",
        url: "https://github.com/MystenLabs/sui/tree/main/crates/sui-framework",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_links_are_https() {
        let urls = RESOURCE_CARDS
            .iter()
            .chain(TOP_RESOURCES.iter())
            .map(|r| r.url)
            .chain(std::iter::once(INSTALL_CLI_URL));
        for url in urls {
            assert!(url.starts_with("https://"), "{url}");
        }
    }

    #[test]
    fn counter_module_is_complete() {
        assert!(COUNTER_MODULE.starts_with("module example::counter {"));
        assert!(COUNTER_MODULE.contains("public entry fun increment"));
        assert!(COUNTER_MODULE.trim_end().ends_with('}'));
    }

    #[test]
    fn contracts_ordered_by_complexity() {
        let levels: Vec<_> = EXAMPLE_CONTRACTS.iter().map(|c| c.complexity.label()).collect();
        assert_eq!(levels, ["Beginner", "Intermediate", "Intermediate", "Advanced"]);
    }
}
