use crate::Catalogue;

pub(crate) static CATALOGUE: Catalogue = Catalogue {
    impact: [
        // reputation
        [
            "Minor/limited. Consider: 1. Does it affect only the agency's image? 2. Does it affect how the agency's role is perceived? 3. Does it affect the image of the service?",
            "Serious. Consider: 1. Does it affect the image of the service? 2. Does it affect user confidence? 3. Could it lead to a civil lawsuit?",
            "Very serious. Consider: 1. Does it damage the state's reputation at national level? 2. Could it lead to a civil lawsuit? 3. Could it lead to criminal prosecution?",
        ],
        // usage
        [
            "Single service or internal operation. Consider: 1. Does it affect work inside the agency? 2. Does it reduce staff productivity? 3. Does it affect a small number of users?",
            "Domain, ministry, inter-agency or provincial operation. Consider: 1. Does it obstruct work inside the agency and its contract partners? 2. Does it degrade service performance? 3. Are some services inconvenienced or delayed without data loss? 4. Does it affect some service users?",
            "Cross-domain, cross-sector or regional operation under an integration plan. Consider: 1. Does it affect more than two network agencies? 2. Does it affect every service user with nationwide reach? 3. Does an outage cause damage to service users? 4. Is system data lost beyond recovery?",
        ],
        // financial
        [
            "Up to 5 million baht (small project). Consider the cost of damage to the service or project, such as operating costs, fines, compensation and damages, up to 5 million baht. Monetary and asset losses may include legal penalties, damages and operating costs.",
            "From 5 million up to 100 million baht (medium project). Consider the cost of damage to the service or project, such as operating costs, fines, compensation and damages, in this range. Monetary and asset losses may include legal penalties, damages and operating costs.",
            "100 million baht or more (large project). Consider the cost of damage to the service or project, such as operating costs, fines, compensation and damages, of 100 million baht or more. Monetary and asset losses may include legal penalties, damages and operating costs.",
        ],
        // legal
        [
            "Non-compliance with organisational rules with minor impact. Consider: 1. Are organisation-level rules breached? 2. Does the agency face internal penalties?",
            "Non-compliance with ministerial rules and regulations with significant impact, missing public-sector development targets. Consider: 1. Are ministry-level rules breached? 2. Does the agency face criminal, civil or administrative penalties?",
            "Non-compliance with law, cabinet resolutions or regulations with significant impact, missing integration-plan targets. Consider: 1. Is the law or a cabinet resolution clearly breached? 2. Does the breach expose the agency to criminal, civil or administrative penalties?",
        ],
    ],
    sub_definition: [
        "Preserving authorised restrictions on access and disclosure, including means for protecting personal privacy and proprietary information.",
        "Guarding against improper modification or destruction of information, including ensuring non-repudiation and authenticity.",
        "Ensuring timely and reliable access to and use of information.",
    ],
    sub_impact: [
        // confidentiality
        [
            "Low: unauthorised disclosure could have a limited adverse effect on less important or secondary national interests.",
            "Medium: unauthorised disclosure could have a serious adverse effect on important national interests.",
            "High: unauthorised disclosure could have a severe or catastrophic adverse effect on extremely important national interests.",
        ],
        // integrity
        [
            "Low: unauthorised modification or destruction could have a limited adverse effect on less important or secondary national interests.",
            "Medium: unauthorised modification or destruction could have a serious adverse effect on important national interests.",
            "High: unauthorised modification or destruction could have a severe or catastrophic adverse effect on extremely important national interests.",
        ],
        // availability
        [
            "Low: disruption of access to or use of information or systems could have a limited adverse effect on less important or secondary national interests.",
            "Medium: disruption of access to or use of information or systems could have a serious adverse effect on important national interests.",
            "High: disruption of access to or use of information or systems could have a severe or catastrophic adverse effect on extremely important national interests.",
        ],
    ],
    likelihood: [
        "Level 1: Rare (at most once a year)",
        "Level 2: Unlikely (no more than twice a year)",
        "Level 3: Moderate (3-5 times a year)",
        "Level 4: Likely (6-10 times a year)",
        "Level 5: Almost certain (at least once a month)",
    ],
    impact_level: ["Low", "Medium", "High"],
    classification: ["Public", "Internal", "Confidential", "Secret", "Top Secret"],
    impact_heading: "Impact level definitions",
};
