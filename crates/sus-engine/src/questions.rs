//! Built-in multilingual question set.

use crate::question_bank::SeedQuestion;

pub const DEFAULT_QUESTIONS: &[SeedQuestion] = &[
    SeedQuestion::new(
        "Does the suspect like pizza?",
        "Má podezřelý rád pizzu?",
        "Czy podejrzany lubi pizzę?",
        "basic",
        1,
    ),
    SeedQuestion::new(
        "Is the suspect leftist?",
        "Je podezřelý levičák?",
        "Czy podejrzany jest lewicowy?",
        "political",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect have depressions?",
        "Má podezřelý deprese?",
        "Czy podejrzany ma depresje?",
        "psychological",
        1,
    ),
    SeedQuestion::new(
        "Is the suspect a fan of social media?",
        "Je podezřelý fanouškem sociálních sítí?",
        "Czy podejrzany jest fanem mediów społecznościowych?",
        "sociological",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect enjoy traveling?",
        "Má podezřelý rád cestování?",
        "Czy podejrzany lubi podróże?",
        "basic",
        1,
    ),
    SeedQuestion::new(
        "Is the suspect environmentally conscious?",
        "Je podezřelý ohleduplný k životnímu prostředí?",
        "Czy podejrzany ma świadomość ekologiczną?",
        "political",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect attend therapy?",
        "Navštěvuje podezřelý terapii?",
        "Czy podejrzany chodzi na terapię?",
        "psychological",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect believe in traditional family?",
        "Vyznává podezřelý tradiční rodinu?",
        "Czy podejrzany wierzy w tradycyjną rodzinę?",
        "sociological",
        1,
    ),
    SeedQuestion::new(
        "Is the suspect vegetarian?",
        "Je podezřelý vegetarián?",
        "Czy podejrzany jest wegetarianinem?",
        "basic",
        1,
    ),
    SeedQuestion::new(
        "Is the suspect vegan?",
        "Je podezřelý vegan?",
        "Czy podejrzany jest weganinem?",
        "basic",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect vote regularly?",
        "Chodí podezřelý pravidelně k volbám?",
        "Czy podejrzany regularnie głosuje?",
        "political",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect struggle with anxiety?",
        "Má podezřelý problémy s úzkostmi?",
        "Czy podejrzany zmaga się z lękiem?",
        "psychological",
        1,
    ),
    SeedQuestion::new(
        "Is the suspect an extrovert?",
        "Je podezřelý extrovert?",
        "Czy podejrzany jest ekstrawertykiem?",
        "sociological",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect sport regularly?",
        "Sportuje podezřelý pravidelně?",
        "Czy podejrzany regularnie uprawia sport?",
        "basic",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect have strong political opinions?",
        "Má podezřelý vyhraněné politické názory?",
        "Czy podejrzany ma silne poglądy polityczne?",
        "political",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect meditate?",
        "Medituje podezřelý?",
        "Czy podejrzany medytuje?",
        "psychological",
        1,
    ),
    SeedQuestion::new(
        "Is the suspect part of a secret community?",
        "Je podezřelý členem tajné komunity?",
        "Czy podejrzany jest częścią tajnej społeczności?",
        "sociological",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect enjoy cooking?",
        "Je podezřelý členem uzavřené komunity?",
        "Czy podejrzany lubi gotować?",
        "basic",
        1,
    ),
    SeedQuestion::new(
        "Is the suspect involved in activism?",
        "Je podezřelý zapojen do aktivismu?",
        "Czy podejrzany jest zaangażowany w aktywizm?",
        "political",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect have mood swings?",
        "Má podezřelý výkyvy nálad?",
        "Czy podejrzany miewa wahania nastroju?",
        "psychological",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect follow trends?",
        "Řídí se podezřelý trendy?",
        "Czy podejrzany podąża za trendami?",
        "sociological",
        1,
    ),
    SeedQuestion::new(
        "Is the suspect a fan of sci-fi movies?",
        "Je podezřelý fanouškem sci-fi filmů?",
        "Czy podejrzany jest fanem filmów science-fiction?",
        "basic",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect lean towards conservatism?",
        "Přiklání se podezřelý ke konzervatismu?",
        "Czy podejrzany skłania się ku konserwatyzmowi?",
        "political",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect enjoy large social gatherings?",
        "Má podezřelý rád velká společenská setkání?",
        "Czy podejrzany lubi duże spotkania towarzyskie?",
        "sociological",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect enjoy hiking?",
        "Má podezřelý rád pěší turistiku?",
        "Czy podejrzany lubi piesze wędrówki?",
        "basic",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect have progressive views?",
        "Má podezřelý pokrokové názory?",
        "Czy podejrzany ma postępowe poglądy?",
        "political",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect think they are member of a minority?",
        "Myslí si podezřelý, že je menšinou?",
        "Czy podejrzany uważa się za członka mniejszości?",
        "sociological",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect enjoy reading books?",
        "Čte podezřelý rád knihy?",
        "Czy podejrzany lubi czytać książki?",
        "basic",
        1,
    ),
    SeedQuestion::new(
        "Is the suspect politically active online?",
        "Je podezřelý politicky aktivní na internetu?",
        "Czy podejrzany jest aktywny politycznie w Internecie?",
        "political",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect have low self-esteem?",
        "Má podezřelý nízké sebevědomí?",
        "Czy podejrzany ma niską samoocenę?",
        "psychological",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect belong to a religious organization?",
        "Patří podezřelý k náboženské organizaci?",
        "Czy podejrzany należy do organizacji religijnej?",
        "sociological",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect discuss politics frequently?",
        "Diskutuje podezřelý často o politice?",
        "Czy podejrzany często dyskutuje o polityce?",
        "political",
        1,
    ),
    SeedQuestion::new(
        "Is the suspect involved in charity work?",
        "Podílí se podezřelý na charitativní činnosti?",
        "Czy podejrzany jest zaangażowany w działalność charytatywną?",
        "sociological",
        1,
    ),
    SeedQuestion::new(
        "Is the suspect a pet owner?",
        "Má podezřelý domácího mazlíčka?",
        "Czy podejrzany jest właścicielem zwierzęcia?",
        "basic",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect experience panic attacks?",
        "Mívá podezřelý panické ataky?",
        "",
        "psychological",
        1,
    ),
    SeedQuestion::new(
        "Is the suspect active in a subculture?",
        "Je podezřelý aktivní v některé subkultuře?",
        "Czy podejrzany doświadcza ataków paniki?",
        "sociological",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect enjoy classical music?",
        "Má podezřelý rád klasickou hudbu?",
        "Czy podejrzany lubi muzykę klasyczną?",
        "basic",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect practice positive affirmations?",
        "Praktikuje podezřelý pozitivní afirmace?",
        "Czy podejrzany praktykuje pozytywne afirmacje?",
        "psychological",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect have many friends?",
        "Má podezřelý hodně přátel?",
        "Czy podejrzany ma wielu przyjaciół?",
        "sociological",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect enjoy fast food?",
        "Má podezřelý rád rychlé občerstvení?",
        "Czy podejrzany lubi fast foody?",
        "basic",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect support LGBTQ+ rights?",
        "Podporuje podezřelý práva LGBTQ+ lidí?",
        "Czy podejrzany wspiera prawa osób LGBTQ+?",
        "political",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect watch reality TV?",
        "Sleduje podezřelý reality show?",
        "Czy podejrzany ogląda reality TV?",
        "basic",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect believe in socialism?",
        "Je podezřelý zastáncem socialismu?",
        "Czy podejrzany wierzy w socjalizm?",
        "political",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect engage in self-care?",
        "Pečuje podezřelý o sebe?",
        "Czy podejrzany angażuje się w samoopiekę?",
        "psychological",
        1,
    ),
    SeedQuestion::new(
        "Is the suspect socially awkward?",
        "Je podezřelý společensky neohrabaný?",
        "Czy podejrzany jest niezręczny społecznie?",
        "sociological",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect align with feminist ideals?",
        "Je podezřelý v souladu s feministickými ideály?",
        "Czy podejrzany jest zgodny z feministycznymi ideałami?",
        "political",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect have trust issues?",
        "Má podezřelý problémy s důvěrou?",
        "Czy podejrzany ma problemy z zaufaniem?",
        "psychological",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect drink alcohol?",
        "Pije podezřelý alkohol?",
        "Czy podejrzany pije alkohol?",
        "basic",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect have anger issues?",
        "Má podezřelý problémy se vztekem?",
        "Czy podejrzany ma problemy z gniewem?",
        "psychological",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect regularly attend social events?",
        "Navštěvuje podezřelý pravidelně společenské akce?",
        "Czy podejrzany regularnie uczestniczy w wydarzeniach towarzyskich?",
        "sociological",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect enjoy gardening?",
        "Pracuje podezřelý rád na zahradě?",
        "Czy podejrzany lubi ogrodnictwo?",
        "basic",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect have a fear of failure?",
        "Má podezřelý strach ze selhání?",
        "Czy podejrzany obawia się porażki?",
        "psychological",
        1,
    ),
    SeedQuestion::new(
        "Is the suspect a fan of horror movies?",
        "Je podezřelý fanouškem hororů?",
        "Czy podejrzany jest fanem horrorów?",
        "basic",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect believe in capitalism?",
        "Věří podezřelý v kapitalismus?",
        "Czy podejrzany wierzy w kapitalizm?",
        "political",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect enjoy fine dining?",
        "Má podezřelý rád dobré jídlo?",
        "Czy podejrzany lubi dobrze zjeść?",
        "basic",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect support authoritarianism?",
        "Podporuje podezřelý autoritářství?",
        "Czy podejrzany sympatyzuje z autorytaryzmem?",
        "political",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect feel isolated?",
        "Cítí se podezřelý izolovaný?",
        "Czy podejrzany czuje się odizolowany?",
        "psychological",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect collect anything?",
        "Sbírá podezřelý něco?",
        "Czy podejrzany coś zbiera?",
        "basic",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect support progressive taxation?",
        "Podporuje podezřelý progresivní zdanění?",
        "Czy podejrzany popiera progresywne opodatkowanie?",
        "political",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect struggle with self-doubt?",
        "Bojuje podezřelý s pochybnostmi o sobě samém?",
        "Czy podejrzany zmaga się z wątpliwościami?",
        "psychological",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect support universal basic income?",
        "Podporuje podezřelý univerzální základní příjem?",
        "",
        "political",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect deal with imposter syndrome?",
        "Trpí podezřelý syndromem podvodníka?",
        "Czy podejrzany popiera uniwersalny dochód podstawowy?",
        "psychological",
        1,
    ),
    SeedQuestion::new(
        "Is the suspect well-connected in their neighborhood?",
        "Má podezřelý ve svém okolí dobré kontakty?",
        "Czy podejrzany ma dobre kontakty w swojej okolicy?",
        "sociological",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect prefer cats?",
        "Má podezřelý raději kočky?",
        "Czy podejrzany preferuje koty?",
        "basic",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect regularly journal?",
        "Píše si podezřelý pravidelně deník?",
        "Czy podejrzany regularnie prowadzi dziennik?",
        "psychological",
        1,
    ),
    SeedQuestion::new(
        "Is the suspect engaged in social justice movements?",
        "Je podezřelý zapojen do hnutí za sociální spravedlnost?",
        "Czy podejrzany jest zaangażowany w ruchy na rzecz sprawiedliwości społecznej?",
        "sociological",
        1,
    ),
    SeedQuestion::new(
        "Has the suspect ever tried drugs?",
        "Zkusil podezřelý někdy drogy?",
        "Czy podejrzany kiedykolwiek próbował narkotyków?",
        "political",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect believe in global climate change?",
        "Věří podezřelý v globální změnu klimatu?",
        "Czy podejrzany wierzy w globalne zmiany klimatu?",
        "ecology",
        1,
    ),
    SeedQuestion::new(
        "Does the suspect like contemporary art?",
        "Má rád podezřelý současné umění?",
        "Czy podejrzany lubi sztukę współczesną?",
        "art",
        1,
    ),
];
