// Built-in diagnostic content: nine areas, three questions each.

use super::{AreaDefinition, Question, StatusText};
use crate::area::Area;

pub(super) const VERSION: &str = "diagnostic-v3.0";

pub(super) const QUESTIONS_PER_AREA: u32 = 3;

pub(super) fn areas() -> Vec<AreaDefinition> {
    vec![
        AreaDefinition {
            area: Area::FinancialControl,
            chaos_name: "Flying Blind",
            tagline: "You're Flying Blind — Making Decisions Without Knowing Your Numbers",
            shadow: "You ignore the numbers because you fear them, or find them too confusing. You run the business from the bank balance.",
            chaos: "Your business is opaque. Money goes in, money goes out, but you have no idea how the machine works inside. You make decisions based on 'bank balance vibes,' not data.",
            crisis: "Insolvency. You run out of cash while thinking you were profitable.",
            descriptions: StatusText {
                low: "Financial visibility is a blind spot. You're likely running the business from your bank balance without understanding the underlying economics.",
                medium: "You have some financial awareness but there are gaps. You may be making decisions without full clarity on margins and cash flow.",
                high: "You have strong financial visibility. You understand your numbers and use them to make informed decisions.",
            },
        },
        AreaDefinition {
            area: Area::GrowthStrategy,
            chaos_name: "Hamster Wheel",
            tagline: "Your Business Is A Hamster Wheel — No Matter How Fast It Spins, It's Going Nowhere",
            shadow: "You focus on 'more sales' without checking the margins or the model. You sell time for money or low-margin products.",
            chaos: "The business demands maximum exertion just to stay in the same place. If you stop running for a day, the business stops. Doubling revenue requires doubling your sweat.",
            crisis: "Burnout. The engine blows up because it was running at redline with no gears.",
            descriptions: StatusText {
                low: "Your business model is fundamentally tied to your personal effort. Growth means working harder, not smarter.",
                medium: "Your growth model has some leverage but you're still too tied to delivery. Scaling will be challenging without changes.",
                high: "Your business model supports scalable growth. Revenue can increase without proportionally increasing your personal workload.",
            },
        },
        AreaDefinition {
            area: Area::LifestyleExit,
            chaos_name: "Trapped",
            tagline: "You're Trapped — You Built a Business That Owns You",
            shadow: "You sacrifice your life for the business, believing 'it will be worth it one day,' without building actual asset value.",
            chaos: "The business has become your prison guard. It dictates your hours, limits your holidays, and drives increasing stress levels. It is a job you cannot quit that you really don't want.",
            crisis: "Resentment. You grow to hate the thing you built, and because it relies on you, it has no saleable value (Zero Exit).",
            descriptions: StatusText {
                low: "The business controls your life rather than enhancing it. Without you, it has little or no saleable value.",
                medium: "There's some flexibility but the business still demands more than you'd like. Exit value is uncertain.",
                high: "Your business supports your desired lifestyle and has genuine asset value independent of you.",
            },
        },
        AreaDefinition {
            area: Area::MarketingLeads,
            chaos_name: "Mud At The Wall",
            tagline: "Your Marketing is Mud At The Wall — Trying Everything, Hoping Something Sticks",
            shadow: "You assume 'being good' is enough. You have tried all kinds of marketing but nothing's worked for you. You depend upon repeat purchases, referrals and luck to get new customers.",
            chaos: "New customers are a novelty, not the normal state of affairs. Your products and services are great, but the streets are empty. You live in anxiety about where the next client is coming from.",
            crisis: "Obscurity. You wither away and are replaced by a louder, inferior competitor.",
            descriptions: StatusText {
                low: "Lead generation is essentially luck-based. You depend heavily on referrals and repeat business with no systematic approach.",
                medium: "Lead generation is inconsistent. You've had some success but lack a repeatable, predictable system.",
                high: "You have predictable, systematic lead generation. You know what works and can scale it reliably.",
            },
        },
        AreaDefinition {
            area: Area::SellingSales,
            chaos_name: "Tyre Kickers",
            tagline: "You're Drowning in Tyre Kickers — Plenty of Interest, Not Enough Sales",
            shadow: "You avoid 'selling.' You have no process. Customers don't buy, they go away 'to think about it' instead.",
            chaos: "The business wastes opportunity. Interest pours in, but it drains right out through the holes in your process. You are paying for attention that you cannot capture.",
            crisis: "Starvation. You have leads, but you starve for lack of signed contracts.",
            descriptions: StatusText {
                low: "Sales is a weakness. You lack a defined process and many promising leads slip away unconverted.",
                medium: "Your sales process has some structure but conversion could be better. Opportunities are being lost.",
                high: "You have a strong sales process with healthy conversion rates. Leads reliably turn into paying customers.",
            },
        },
        AreaDefinition {
            area: Area::ServiceReputation,
            chaos_name: "Revolving Door",
            tagline: "You've Got a Revolving Door — Customers Buy Once and Disappear",
            shadow: "You focus entirely on the 'hunt' (new clients) and neglect the 'harvest' (existing clients). Customers become restless and don't feel like you care about them.",
            chaos: "The business can't hold onto momentum. For every new client you win and bring through the front door, an old one walks out the back door. You are exhausted by client onboarding without growth.",
            crisis: "Reputation Collapse. The market thinks you don't care, even though you do, and the number of new leads and referrals slows to a drip.",
            descriptions: StatusText {
                low: "Customer retention is poor. You're constantly replacing lost clients rather than building on a loyal base.",
                medium: "You retain some customers but there's room for improvement. Referrals are inconsistent.",
                high: "Customer retention is strong. Clients return, refer others, and your reputation drives organic growth.",
            },
        },
        AreaDefinition {
            area: Area::DriveChange,
            chaos_name: "Asleep At The Wheel",
            tagline: "You're Asleep At The Wheel — The Business Needs You To Step-Up",
            shadow: "You are too busy or preoccupied with getting work done that you don't make the changes to improve and grow your business. You avoid tough decisions and tolerate too much mediocrity.",
            chaos: "The business is not being steered because you're in the engine room, rather than at the wheel. It floats wherever the current takes it. There is lots of movement, but no destination.",
            crisis: "Stagnation. The market evolves, and your business is left behind, obsolete.",
            descriptions: StatusText {
                low: "The business is drifting. Urgent work constantly displaces important strategic improvements.",
                medium: "You're aware of the need for change but struggle to find time or make difficult decisions promptly.",
                high: "You're proactively leading change. You work on the business strategically and make tough decisions when needed.",
            },
        },
        AreaDefinition {
            area: Area::PeopleManagement,
            chaos_name: "Herding Cats",
            tagline: "You're Herding Cats — Your Team Pulls In Every Direction But Yours",
            shadow: "You hoard responsibility. You don't train. You hire 'helpers' instead of 'owners.' Your team brings you problems, not solutions.",
            chaos: "The business expects you to behave like a school teacher while your staff spend the day putting their hands up, asking for permission. If you leave the room, things grind to a halt.",
            crisis: "The Bottleneck. The business hits a hard ceiling because you run out of time and cannot answer any more questions.",
            descriptions: StatusText {
                low: "You are the bottleneck. The team depends on you for most decisions and lacks autonomy.",
                medium: "Your team does reasonable work but you're still too involved. Delegation could be stronger.",
                high: "Your team is empowered and takes ownership. They solve problems and drive progress without constant oversight.",
            },
        },
        AreaDefinition {
            area: Area::SystemsAutomation,
            chaos_name: "Blu-Tac & Post-It Notes",
            tagline: "Your Systems Are Blu-Tac & Post-It Notes — They Don't Always Stick!",
            shadow: "You rely on memory, sticky notes, and heroic efforts to keep things moving. Your motto might be 'I'll do that! I can do it faster than my team.'",
            chaos: "The business is fragile. It looks solid from the outside, but one gust of wind (a key staff member leaving, you getting sick) and work grinds to a halt.",
            crisis: "Implosion. You try to scale, and the weight of the growth crushes you and your team because there's insufficient structure to hold things together.",
            descriptions: StatusText {
                low: "The business runs on heroic effort and memory. It's fragile and would struggle to handle growth or key personnel changes.",
                medium: "You have some systems but they're incomplete. Key knowledge lives in people's heads rather than in processes.",
                high: "Your business runs on robust systems. Processes are documented and the business can handle volume without chaos.",
            },
        },
    ]
}

pub(super) fn questions() -> Vec<Question> {
    vec![
        Question {
            id: "fc-1",
            area: Area::FinancialControl,
            text: "I can confidently state my gross profit margin and net profit for last month without checking.",
            scale_labels: [
                "I have no idea what these numbers are",
                "I'd have to dig through records to find out",
                "I have a rough sense but couldn't be precise",
                "I know approximately but not exactly",
                "I know these numbers and review them regularly",
            ],
        },
        Question {
            id: "fc-2",
            area: Area::FinancialControl,
            text: "I have a clear picture of my cash flow forecast for the next 3 months.",
            scale_labels: [
                "I don't forecast cash flow at all",
                "I have a vague sense of upcoming expenses",
                "I track some things but not systematically",
                "I have reasonable visibility but gaps exist",
                "I have a detailed, accurate forecast I update regularly",
            ],
        },
        Question {
            id: "fc-3",
            area: Area::FinancialControl,
            text: "I know exactly which products, services, or clients are most profitable for my business.",
            scale_labels: [
                "I've never analysed profitability by product/client",
                "I assume some are more profitable but haven't checked",
                "I have a general sense but no concrete data",
                "I've analysed this but not recently",
                "I know precisely and use this to guide focus",
            ],
        },
        Question {
            id: "gs-1",
            area: Area::GrowthStrategy,
            text: "If I doubled my revenue tomorrow, my workload wouldn't need to double with it.",
            scale_labels: [
                "Doubling revenue would definitely mean doubling my hours",
                "Revenue growth always means significantly more work for me",
                "Some growth is possible without more hours, but not much",
                "I could handle moderate growth without much more effort",
                "My model allows revenue to grow independently of my time",
            ],
        },
        Question {
            id: "gs-2",
            area: Area::GrowthStrategy,
            text: "I've consciously designed my pricing and offerings around margin, not just volume.",
            scale_labels: [
                "I've never really thought about margins",
                "I price based on competitors or gut feel",
                "I consider margins but don't optimise for them",
                "I've designed some offerings with margin in mind",
                "Margin is central to how I design and price everything",
            ],
        },
        Question {
            id: "gs-3",
            area: Area::GrowthStrategy,
            text: "The business can grow without me personally delivering more work.",
            scale_labels: [
                "I personally deliver almost all the work",
                "Growth means I must deliver significantly more",
                "Others deliver some work but I'm still heavily involved",
                "I could step back from most delivery if needed",
                "The business grows through others' delivery, not mine",
            ],
        },
        Question {
            id: "le-1",
            area: Area::LifestyleExit,
            text: "I take regular holidays where the business continues to operate without me.",
            scale_labels: [
                "I can't take time off — the business stops if I do",
                "I can take brief breaks but the business suffers",
                "Short holidays are possible with some preparation",
                "I can take reasonable breaks with the business running",
                "I take regular holidays and the business runs smoothly",
            ],
        },
        Question {
            id: "le-2",
            area: Area::LifestyleExit,
            text: "My business would have value to a buyer, even if I weren't part of the deal.",
            scale_labels: [
                "Without me, there's nothing to sell",
                "The business has minimal value without me",
                "Some value exists but I'm still central to it",
                "Reasonable value exists independently of me",
                "The business has strong standalone value",
            ],
        },
        Question {
            id: "le-3",
            area: Area::LifestyleExit,
            text: "I have a clear vision of what I want my exit from this business to look like.",
            scale_labels: [
                "I've never thought about exit",
                "Exit seems impossibly far away or irrelevant",
                "I've thought about it vaguely but no clear plan",
                "I have a general idea but haven't planned it",
                "I have a clear exit vision and I'm building towards it",
            ],
        },
        Question {
            id: "ml-1",
            area: Area::MarketingLeads,
            text: "I have a predictable, repeatable system that generates new enquiries each month.",
            scale_labels: [
                "New enquiries are completely unpredictable",
                "Enquiries come but I don't know why or when",
                "Some channels work sometimes but inconsistently",
                "I have systems that work reasonably well",
                "I have a reliable system that generates consistent leads",
            ],
        },
        Question {
            id: "ml-2",
            area: Area::MarketingLeads,
            text: "I know exactly where my best clients come from and focus my marketing efforts there.",
            scale_labels: [
                "I have no idea where my best clients come from",
                "I could guess but haven't really tracked it",
                "I know broadly but not specifically",
                "I track sources and have reasonable insight",
                "I know precisely and concentrate efforts accordingly",
            ],
        },
        Question {
            id: "ml-3",
            area: Area::MarketingLeads,
            text: "I can clearly articulate what makes my business different from competitors.",
            scale_labels: [
                "I struggle to explain why clients should choose me",
                "My differentiation is vague or generic",
                "I have some differentiators but they're not compelling",
                "I have a clear message but could sharpen it",
                "My positioning is clear, compelling, and well-communicated",
            ],
        },
        Question {
            id: "ss-1",
            area: Area::SellingSales,
            text: "I have a defined sales process that I (or my team) follow consistently.",
            scale_labels: [
                "No process — every sale is completely ad hoc",
                "A loose approach but nothing structured",
                "Some steps exist but aren't followed consistently",
                "A reasonable process that we mostly follow",
                "A clear, documented process followed every time",
            ],
        },
        Question {
            id: "ss-2",
            area: Area::SellingSales,
            text: "I convert a healthy proportion of enquiries into paying customers.",
            scale_labels: [
                "Very few enquiries become customers",
                "Conversion is poor and frustrating",
                "Conversion is okay but could be much better",
                "Conversion is reasonable for my industry",
                "I have strong conversion rates I'm proud of",
            ],
        },
        Question {
            id: "ss-3",
            area: Area::SellingSales,
            text: "Prospects rarely leave to 'think about it' without a clear next step agreed.",
            scale_labels: [
                "Most prospects disappear to 'think about it'",
                "Many conversations end without clear next steps",
                "Sometimes I secure next steps, sometimes not",
                "I usually establish clear next steps",
                "I always secure commitment to a next step",
            ],
        },
        Question {
            id: "sr-1",
            area: Area::ServiceReputation,
            text: "Most of my customers return for repeat purchases or ongoing work.",
            scale_labels: [
                "Almost no customers return",
                "Few customers come back",
                "Some repeat business but inconsistent",
                "Good repeat business from many customers",
                "Strong customer retention and loyalty",
            ],
        },
        Question {
            id: "sr-2",
            area: Area::ServiceReputation,
            text: "Customers regularly refer others to my business without being asked.",
            scale_labels: [
                "Referrals are extremely rare",
                "Occasional referrals but nothing reliable",
                "Some referrals come in organically",
                "Regular referrals from satisfied customers",
                "Referrals are a significant source of business",
            ],
        },
        Question {
            id: "sr-3",
            area: Area::ServiceReputation,
            text: "I actively gather testimonials and reviews, and my online reputation is strong.",
            scale_labels: [
                "No testimonials or reviews",
                "A few dated testimonials, no active collection",
                "Some reviews but not systematically gathered",
                "Regular collection with a decent online presence",
                "Strong, recent reviews and testimonials everywhere",
            ],
        },
        Question {
            id: "dc-1",
            area: Area::DriveChange,
            text: "I regularly set aside time to work ON the business, not just IN it.",
            scale_labels: [
                "I'm 100% consumed by day-to-day work",
                "Very rarely find time for strategic work",
                "Occasionally work on the business",
                "Regular but not enough strategic time",
                "Dedicated, protected time for strategic work",
            ],
        },
        Question {
            id: "dc-2",
            area: Area::DriveChange,
            text: "I make difficult decisions promptly rather than letting issues fester.",
            scale_labels: [
                "I avoid difficult decisions at all costs",
                "Difficult decisions get delayed for months",
                "I eventually make them but slowly",
                "I address most issues reasonably promptly",
                "I tackle difficult decisions head-on quickly",
            ],
        },
        Question {
            id: "dc-3",
            area: Area::DriveChange,
            text: "I have clear goals for the business this year and a plan to achieve them.",
            scale_labels: [
                "No goals or plan",
                "Vague aspirations but nothing concrete",
                "Some goals but no real plan",
                "Clear goals with a reasonable plan",
                "Crystal clear goals with detailed action plan",
            ],
        },
        Question {
            id: "pm-1",
            area: Area::PeopleManagement,
            text: "My team takes ownership of their work and solves problems without always needing me.",
            scale_labels: [
                "Everything requires my input",
                "Team rarely acts without checking with me",
                "Some ownership but still too dependent on me",
                "Good ownership with occasional escalations",
                "Strong ownership — they handle issues independently",
            ],
        },
        Question {
            id: "pm-2",
            area: Area::PeopleManagement,
            text: "Everyone in my team knows exactly what's expected of them and how success is measured.",
            scale_labels: [
                "Unclear expectations and no measures",
                "Vague expectations, no real metrics",
                "Some clarity but inconsistent",
                "Clear expectations for most roles",
                "Crystal clear expectations and metrics for all",
            ],
        },
        Question {
            id: "pm-3",
            area: Area::PeopleManagement,
            text: "I can step away from day-to-day operations without things grinding to a halt.",
            scale_labels: [
                "Everything stops if I'm not there",
                "Significant problems if I'm away briefly",
                "Can manage short absences with preparation",
                "Team handles most things without me",
                "Operations run smoothly without my involvement",
            ],
        },
        Question {
            id: "sa-1",
            area: Area::SystemsAutomation,
            text: "Key processes in my business are documented so anyone could follow them.",
            scale_labels: [
                "Nothing is documented",
                "Very little documentation exists",
                "Some processes documented but incomplete",
                "Most key processes are documented",
                "Comprehensive documentation for all processes",
            ],
        },
        Question {
            id: "sa-2",
            area: Area::SystemsAutomation,
            text: "If a key team member left tomorrow, their knowledge wouldn't leave with them.",
            scale_labels: [
                "Critical knowledge lives only in people's heads",
                "Most knowledge would walk out the door",
                "Some knowledge captured but big gaps",
                "Reasonable knowledge transfer processes",
                "All critical knowledge is documented and shared",
            ],
        },
        Question {
            id: "sa-3",
            area: Area::SystemsAutomation,
            text: "The business could handle a significant increase in volume without chaos.",
            scale_labels: [
                "Any increase would cause chaos",
                "Even small increases create problems",
                "Moderate increases manageable with stress",
                "Could handle reasonable growth smoothly",
                "Built to scale — growth wouldn't cause chaos",
            ],
        },
    ]
}
