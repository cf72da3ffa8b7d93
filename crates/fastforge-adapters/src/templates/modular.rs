//! Modular architecture: one flat package with models, schemas, routers and crud.

pub const TEMPLATES: &[(&str, &str)] = &[
    ("main", MAIN),
    ("model", MODEL),
    ("schema", SCHEMA),
    ("router", ROUTER),
    ("database", DATABASE),
    ("crud", CRUD),
    ("dependencies", DEPENDENCIES),
    ("package", PACKAGE),
];

const MAIN: &str = r#"# {{ file_path }}
from fastapi import FastAPI

from app.database import Base, engine

Base.metadata.create_all(bind=engine)

app = FastAPI(title="FastAPI Project")

# Register feature routers here, e.g.:
# from app.routers import items
# app.include_router(items.router, prefix="/items", tags=["items"])


@app.get("/")
def read_root():
    return {"message": "Welcome to FastAPI with Modular Architecture!"}
"#;

const MODEL: &str = r#"# {{ file_path }}
from datetime import datetime

from sqlalchemy import Column, DateTime, Integer

from app.database import Base


class {{ class_name }}(Base):
    __tablename__ = "{{ table_name }}"

    id = Column(Integer, primary_key=True, index=True)
    created_at = Column(DateTime, default=datetime.utcnow)
    updated_at = Column(DateTime, default=datetime.utcnow, onupdate=datetime.utcnow)

    def __repr__(self):
        return f"<{{ class_name }}(id={self.id})>"
"#;

const SCHEMA: &str = r#"# {{ file_path }}
from datetime import datetime

from pydantic import BaseModel


class {{ class_name }}Base(BaseModel):
    pass


class {{ class_name }}Create({{ class_name }}Base):
    pass


class {{ class_name }}Update({{ class_name }}Base):
    pass


class {{ class_name }}({{ class_name }}Base):
    id: int
    created_at: datetime
    updated_at: datetime

    class Config:
        from_attributes = True
"#;

const ROUTER: &str = r#"# {{ file_path }}
from typing import List

from fastapi import APIRouter, Depends, HTTPException
from sqlalchemy.orm import Session

from app import models, schemas
from app.database import get_db

router = APIRouter()


def _get_or_404(db: Session, {{ module_name }}_id: int) -> models.{{ class_name }}:
    {{ module_name }} = db.query(models.{{ class_name }}).filter(models.{{ class_name }}.id == {{ module_name }}_id).first()
    if {{ module_name }} is None:
        raise HTTPException(status_code=404, detail="{{ class_name }} not found")
    return {{ module_name }}


@router.post("/", response_model=schemas.{{ class_name }})
def create_{{ module_name }}(data: schemas.{{ class_name }}Create, db: Session = Depends(get_db)):
    db_{{ module_name }} = models.{{ class_name }}(**data.model_dump())
    db.add(db_{{ module_name }})
    db.commit()
    db.refresh(db_{{ module_name }})
    return db_{{ module_name }}


@router.get("/{{{ module_name }}_id}", response_model=schemas.{{ class_name }})
def read_{{ module_name }}({{ module_name }}_id: int, db: Session = Depends(get_db)):
    return _get_or_404(db, {{ module_name }}_id)


@router.get("/", response_model=List[schemas.{{ class_name }}])
def read_{{ table_name }}(skip: int = 0, limit: int = 100, db: Session = Depends(get_db)):
    return db.query(models.{{ class_name }}).offset(skip).limit(limit).all()


@router.put("/{{{ module_name }}_id}", response_model=schemas.{{ class_name }})
def update_{{ module_name }}({{ module_name }}_id: int, data: schemas.{{ class_name }}Update, db: Session = Depends(get_db)):
    db_{{ module_name }} = _get_or_404(db, {{ module_name }}_id)
    for field, value in data.model_dump(exclude_unset=True).items():
        setattr(db_{{ module_name }}, field, value)
    db.commit()
    db.refresh(db_{{ module_name }})
    return db_{{ module_name }}


@router.delete("/{{{ module_name }}_id}")
def delete_{{ module_name }}({{ module_name }}_id: int, db: Session = Depends(get_db)):
    db.delete(_get_or_404(db, {{ module_name }}_id))
    db.commit()
    return {"message": "{{ class_name }} deleted successfully"}
"#;

const DATABASE: &str = r#"# {{ file_path }}
from sqlalchemy import create_engine
from sqlalchemy.orm import declarative_base, sessionmaker

SQLALCHEMY_DATABASE_URL = "sqlite:///./app.db"

engine = create_engine(SQLALCHEMY_DATABASE_URL, connect_args={"check_same_thread": False})
SessionLocal = sessionmaker(autocommit=False, autoflush=False, bind=engine)
Base = declarative_base()


def get_db():
    db = SessionLocal()
    try:
        yield db
    finally:
        db.close()
"#;

const CRUD: &str = r#"# {{ file_path }}
from typing import List, Optional

from sqlalchemy.orm import Session

from app import models, schemas


class {{ class_name }}CRUD:
    def __init__(self, db: Session):
        self.db = db

    def get(self, {{ module_name }}_id: int) -> Optional[models.{{ class_name }}]:
        return self.db.query(models.{{ class_name }}).filter(models.{{ class_name }}.id == {{ module_name }}_id).first()

    def get_all(self, skip: int = 0, limit: int = 100) -> List[models.{{ class_name }}]:
        return self.db.query(models.{{ class_name }}).offset(skip).limit(limit).all()

    def create(self, data: schemas.{{ class_name }}Create) -> models.{{ class_name }}:
        db_{{ module_name }} = models.{{ class_name }}(**data.model_dump())
        self.db.add(db_{{ module_name }})
        self.db.commit()
        self.db.refresh(db_{{ module_name }})
        return db_{{ module_name }}

    def update(self, {{ module_name }}_id: int, data: schemas.{{ class_name }}Update) -> Optional[models.{{ class_name }}]:
        db_{{ module_name }} = self.get({{ module_name }}_id)
        if db_{{ module_name }}:
            for field, value in data.model_dump(exclude_unset=True).items():
                setattr(db_{{ module_name }}, field, value)
            self.db.commit()
            self.db.refresh(db_{{ module_name }})
        return db_{{ module_name }}

    def delete(self, {{ module_name }}_id: int) -> bool:
        db_{{ module_name }} = self.get({{ module_name }}_id)
        if not db_{{ module_name }}:
            return False
        self.db.delete(db_{{ module_name }})
        self.db.commit()
        return True
"#;

const DEPENDENCIES: &str = r#"# {{ file_path }}
from fastapi import Depends

from app.crud.{{ module_name }} import {{ class_name }}CRUD
from app.database import get_db


def get_{{ module_name }}_crud(db=Depends(get_db)) -> {{ class_name }}CRUD:
    return {{ class_name }}CRUD(db)
"#;

const PACKAGE: &str = "# {{ file_path }}\n";
